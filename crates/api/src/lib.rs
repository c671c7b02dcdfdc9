//! HTTP gateway with Axum routes.
//!
//! This crate provides:
//! - Relays of the upstream coaching/analytics reads
//! - Budget report endpoints (live and sample)
//! - Health check
//! - Error-to-response mapping

pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use budgetcoach_core::category::CategoryAliasTable;
use budgetcoach_upstream::AnalyticsSource;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where coaching plans, actuals and summaries are read from.
    pub source: Arc<dyn AnalyticsSource>,
    /// Alias table both budgets and actuals are normalized with.
    pub aliases: Arc<CategoryAliasTable>,
    /// Serve the labelled sample report when a live read fails.
    pub sample_fallback: bool,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

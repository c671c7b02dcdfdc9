//! Budget Coach gateway server
//!
//! Main entry point for the Budget Coach backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use budgetcoach_api::{AppState, create_router};
use budgetcoach_core::category::CategoryAliasTable;
use budgetcoach_shared::AppConfig;
use budgetcoach_shared::config::CategoryConfig;
use budgetcoach_upstream::HttpAnalyticsClient;

/// Builds the alias table, falling back to the built-in groups.
fn alias_table(config: &CategoryConfig) -> anyhow::Result<CategoryAliasTable> {
    if config.aliases.is_empty() {
        return Ok(CategoryAliasTable::builtin());
    }
    Ok(CategoryAliasTable::from_groups(&config.aliases)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budgetcoach=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    let aliases = alias_table(&config.categories)?;
    info!(labels = aliases.len(), "Category alias table ready");

    let client = HttpAnalyticsClient::new(&config.upstream)?;
    info!(
        base_url = %client.base_url(),
        timeout_secs = config.upstream.timeout_secs,
        "Upstream client configured"
    );

    // Create application state
    let state = AppState {
        source: Arc::new(client),
        aliases: Arc::new(aliases),
        sample_fallback: config.report.sample_fallback,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

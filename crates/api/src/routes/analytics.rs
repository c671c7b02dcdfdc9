//! Relays of the upstream coaching/analytics reads.
//!
//! A successful read is passed through as-is. Failures keep the upstream
//! status where there is one; transport failures become 503/504.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use budgetcoach_upstream::{Endpoint, FetchError};
use serde_json::json;
use tracing::{error, warn};

use super::parse_user_id;
use crate::AppState;

/// Creates the relay routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/coach/{user_id}", get(get_coach))
        .route("/actuals/{user_id}", get(get_actuals))
        .route("/summary/{user_id}", get(get_summary))
}

async fn get_coach(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    relay(&state, Endpoint::Coach, &user_id).await
}

async fn get_actuals(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    relay(&state, Endpoint::Actuals, &user_id).await
}

async fn get_summary(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    relay(&state, Endpoint::Summary, &user_id).await
}

async fn relay(state: &AppState, endpoint: Endpoint, raw_user_id: &str) -> Response {
    let user = match parse_user_id(raw_user_id) {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state.source.fetch(endpoint, &user).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            warn!(%endpoint, user = %user, error = %e, "Relay failed");
            map_fetch_error(e)
        }
    }
}

fn map_fetch_error(e: FetchError) -> Response {
    match e {
        FetchError::Status { status, body } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(body),
        )
            .into_response(),
        FetchError::Upstream(message) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "error": "upstream_error",
                "message": message
            })),
        )
            .into_response(),
        FetchError::Connect(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "upstream_unavailable",
                "message": "Upstream API is not reachable"
            })),
        )
            .into_response(),
        FetchError::Timeout(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(json!({
                "error": "upstream_timeout",
                "message": "Upstream API did not respond in time"
            })),
        )
            .into_response(),
        FetchError::Decode(_) | FetchError::Request(_) => {
            error!(error = %e, "Relay internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use budgetcoach_shared::AppError;
use budgetcoach_shared::types::UserId;
use serde_json::json;

use crate::AppState;

pub mod analytics;
pub mod health;
pub mod report;

/// Creates the routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(analytics::routes())
        .merge(report::routes())
}

/// Renders an application error as `{ error, message }`.
pub(crate) fn app_error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Parses the `{user_id}` path segment or renders the 400 response.
#[allow(clippy::result_large_err)]
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Response> {
    UserId::parse(raw).map_err(|e| app_error_response(&AppError::Validation(e.to_string())))
}

//! Budget report routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use budgetcoach_core::category::CategoryAliasTable;
use budgetcoach_core::report::{BudgetReport, DataSource, ReportService};
use budgetcoach_core::sample::sample_inputs;
use budgetcoach_shared::AppError;
use budgetcoach_upstream::fetch_report_inputs;
use tracing::{error, info, warn};

use super::{app_error_response, parse_user_id};
use crate::AppState;

/// Notice attached when live data could not be fetched.
const FALLBACK_NOTICE: &str = "API 연결 실패로 샘플 데이터를 표시합니다";

/// Notice attached to the demo report.
const DEMO_NOTICE: &str = "샘플 데이터를 표시합니다";

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report-demo", get(get_demo_report))
        .route("/report/{user_id}", get(get_report))
}

fn sample_report(aliases: &CategoryAliasTable) -> BudgetReport {
    ReportService::build(sample_inputs(), aliases, DataSource::Sample)
}

/// GET /api/report-demo
async fn get_demo_report(State(state): State<AppState>) -> Json<BudgetReport> {
    Json(sample_report(&state.aliases).with_notice(DEMO_NOTICE))
}

/// GET /api/report/{user_id}
async fn get_report(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user = match parse_user_id(&user_id) {
        Ok(user) => user,
        Err(response) => return response,
    };

    match fetch_report_inputs(state.source.as_ref(), &user).await {
        Ok(inputs) => {
            let report = ReportService::build(inputs, &state.aliases, DataSource::Live);
            info!(
                user = %user,
                categories = report.variance.len(),
                over_budget = report.over_budget.len(),
                "Built budget report"
            );
            Json(report).into_response()
        }
        Err(e) if state.sample_fallback => {
            warn!(user = %user, error = %e, "Live report unavailable, serving sample");
            Json(sample_report(&state.aliases).with_notice(FALLBACK_NOTICE)).into_response()
        }
        Err(e) => {
            error!(user = %user, error = %e, "Failed to build budget report");
            app_error_response(&AppError::from(e))
        }
    }
}

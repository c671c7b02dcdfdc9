//! The read seam between the gateway and the upstream API.

use async_trait::async_trait;
use budgetcoach_core::report::{CoachingPlan, ReportInputs};
use budgetcoach_shared::types::UserId;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};
use tracing::debug;

use crate::error::FetchError;
use crate::types::{ActualSpending, Endpoint, IncomeSummary};

/// Source of the per-user coaching and analytics reads.
///
/// Implementations return the raw JSON body of a successful read. A body
/// carrying an `error` field must already be turned into
/// `FetchError::Upstream` by `fetch`.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Reads one endpoint for a user.
    async fn fetch(&self, endpoint: Endpoint, user: &UserId) -> Result<Value, FetchError>;

    /// Reads the coaching plan.
    async fn coaching_plan(&self, user: &UserId) -> Result<CoachingPlan, FetchError> {
        decode(self.fetch(Endpoint::Coach, user).await?)
    }

    /// Reads actual spending per category.
    async fn actual_spending(&self, user: &UserId) -> Result<ActualSpending, FetchError> {
        decode(self.fetch(Endpoint::Actuals, user).await?)
    }

    /// Reads the income/expense totals.
    async fn income_summary(&self, user: &UserId) -> Result<IncomeSummary, FetchError> {
        decode(self.fetch(Endpoint::Summary, user).await?)
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, FetchError> {
    serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fails with `FetchError::Upstream` if the body carries a truthy `error` field.
///
/// `null`, `false`, `""` and `0` are falsy, as in the upstream's own clients.
///
/// # Errors
///
/// Returns `FetchError::Upstream` with the error message.
pub fn reject_body_error(body: Value) -> Result<Value, FetchError> {
    let message = match body.get("error") {
        None | Some(Value::Null | Value::Bool(false)) => None,
        Some(Value::String(message)) if message.is_empty() => None,
        Some(Value::Number(number)) if is_zero(number) => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(other) => Some(other.to_string()),
    };

    match message {
        Some(message) => Err(FetchError::Upstream(message)),
        None => Ok(body),
    }
}

fn is_zero(number: &Number) -> bool {
    number
        .to_string()
        .parse::<Decimal>()
        .is_ok_and(|value| value.is_zero())
}

/// Reads the plan, actuals and summary concurrently.
///
/// The first failure fails the whole read; no partial inputs are returned.
///
/// # Errors
///
/// Returns the `FetchError` of the first read that failed.
pub async fn fetch_report_inputs(
    source: &dyn AnalyticsSource,
    user: &UserId,
) -> Result<ReportInputs, FetchError> {
    let (plan, spending, summary) = tokio::try_join!(
        source.coaching_plan(user),
        source.actual_spending(user),
        source.income_summary(user),
    )?;

    debug!(
        user = %user,
        budgets = plan.budgets.len(),
        actuals = spending.actuals.len(),
        "Fetched report inputs"
    );

    Ok(ReportInputs {
        plan,
        actuals: spending.actuals,
        total_income: summary.total_income,
        reported_expense: summary.total_expense,
    })
}

//! Bodies of the upstream reads.

use budgetcoach_shared::types::CategoryAmountMap;
use budgetcoach_shared::types::de::null_as_default;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three reads the upstream API serves per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `coach/{user_id}`: AI coaching plan.
    Coach,
    /// `actuals/{user_id}`: actual spending per category.
    Actuals,
    /// `summary/{user_id}`: income and expense totals.
    Summary,
}

impl Endpoint {
    /// Path segment of the endpoint.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Coach => "coach",
            Self::Actuals => "actuals",
            Self::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Body of `actuals/{user_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualSpending {
    /// Spending per raw category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actuals: CategoryAmountMap,
}

/// Body of `summary/{user_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSummary {
    /// Total income of the month.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_income: Decimal,
    /// Total expense of the month.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_expense: Decimal,
    /// Month the totals cover (`YYYY-MM`).
    #[serde(default)]
    pub month: Option<String>,
}

//! Report data types.

use budgetcoach_shared::types::CategoryAmountMap;
use budgetcoach_shared::types::de::null_as_default;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{
    Assessment, CategoryShare, ComparisonRow, GoalProgress, SavingsGrade, SummaryMetrics,
    VarianceRecord,
};

/// AI coaching plan for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingPlan {
    /// Recommended budget per raw category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub budgets: CategoryAmountMap,
    /// Recommended amount to save this month.
    #[serde(default, deserialize_with = "null_as_default")]
    pub saving_goal: Decimal,
    /// Coaching tips.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tips: Vec<String>,
}

/// Everything a report is computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportInputs {
    /// Coaching plan with raw budgets.
    pub plan: CoachingPlan,
    /// Raw actual spending per category.
    pub actuals: CategoryAmountMap,
    /// Total income for the period.
    pub total_income: Decimal,
    /// Total expense as reported by the summary endpoint.
    pub reported_expense: Decimal,
}

/// Where the report's figures came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Fetched from the upstream API for the requested user.
    Live,
    /// The built-in sample dataset.
    Sample,
}

/// Budget vs actual report for one user and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Origin of the figures.
    pub data_source: DataSource,
    /// Message to show alongside the report, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// False when there is no spending to analyze.
    pub has_data: bool,
    /// Normalized budgets.
    pub budgets: CategoryAmountMap,
    /// Normalized actual spending.
    pub actuals: CategoryAmountMap,
    /// Per-category variance, largest difference first.
    pub variance: Vec<VarianceRecord>,
    /// Income / expense / savings.
    pub summary: SummaryMetrics,
    /// Spending share per category.
    pub breakdown: Vec<CategoryShare>,
    /// Chart rows of budget vs actual.
    pub comparison: Vec<ComparisonRow>,
    /// Progress towards the saving goal.
    pub goal: GoalProgress,
    /// Savings rate grade.
    pub savings_grade: SavingsGrade,
    /// Overall verdict.
    pub assessment: Assessment,
    /// Categories over budget.
    pub over_budget: Vec<String>,
    /// Coaching tips.
    pub tips: Vec<String>,
}

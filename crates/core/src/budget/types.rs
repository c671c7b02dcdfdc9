//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a category's spending went past its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceStatus {
    /// Actual exceeded the budget.
    Over,
    /// Actual is at or below the budget.
    Under,
}

/// Budget vs actual for one canonical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceRecord {
    /// Canonical category.
    pub category: String,
    /// Budgeted amount (0 if the category has no budget).
    pub budget: Decimal,
    /// Actual amount (0 if nothing was spent).
    pub actual: Decimal,
    /// Actual minus budget.
    pub difference: Decimal,
    /// Share of the budget consumed, or the unbudgeted sentinel.
    pub percentage: Decimal,
    /// Over or under budget.
    pub status: VarianceStatus,
}

/// Which figure was used as the total expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSource {
    /// Sum of the normalized per-category actuals.
    Calculated,
    /// Total reported by the summary endpoint.
    Reported,
}

/// Income, expense and savings for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Total income.
    pub total_income: Decimal,
    /// Effective total expense.
    pub total_expense: Decimal,
    /// Where `total_expense` came from.
    pub expense_source: ExpenseSource,
    /// Income minus expense.
    pub balance: Decimal,
    /// Balance as a percentage of income, one decimal.
    pub savings_rate: Decimal,
}

/// One slice of the spending breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Canonical category.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Share of total spending, one decimal.
    pub share_percent: Decimal,
    /// Budget for the category (0 if none).
    pub budget: Decimal,
    /// Spent more than a nonzero budget.
    pub over_budget: bool,
}

/// Budget and actual side by side, for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Canonical category.
    pub category: String,
    /// Budgeted amount.
    pub budget: Decimal,
    /// Actual amount.
    pub actual: Decimal,
}

/// Progress towards the coaching saving goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Saving goal.
    pub goal: Decimal,
    /// Amount saved so far (never negative).
    pub saved: Decimal,
    /// Achievement percentage, capped at 100, no decimals.
    pub achievement_percent: Decimal,
}

/// Savings rate grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsGrade {
    /// 20% or more.
    Excellent,
    /// 10% up to 20%.
    Average,
    /// Below 10%.
    Low,
}

/// Overall verdict for the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// Balance reached the saving goal.
    GoalExceeded,
    /// Spending stayed within income.
    WithinIncome,
    /// Spending exceeded income.
    Overspent,
}

//! Derived views over normalized budgets and actuals.

use std::collections::BTreeSet;

use budgetcoach_shared::types::{CategoryAmountMap, total_amount};
use rust_decimal::Decimal;

use super::percent::{percent_of, round_display};
use super::types::{
    Assessment, CategoryShare, ComparisonRow, GoalProgress, SavingsGrade, VarianceRecord,
    VarianceStatus,
};

/// Savings rate (percent) from which the grade is `Excellent`.
const EXCELLENT_SAVINGS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Savings rate (percent) from which the grade is `Average`.
const AVERAGE_SAVINGS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Spending per category with its share of the total, largest first.
#[must_use]
pub fn category_breakdown(
    actuals: &CategoryAmountMap,
    budgets: &CategoryAmountMap,
) -> Vec<CategoryShare> {
    let total = total_amount(actuals);

    let mut shares: Vec<CategoryShare> = actuals
        .iter()
        .map(|(category, amount)| {
            let budget = budgets.get(category).copied().unwrap_or_default();
            CategoryShare {
                category: category.clone(),
                amount: *amount,
                share_percent: percent_of(*amount, total)
                    .map(|share| round_display(share, 1))
                    .unwrap_or_default(),
                budget,
                over_budget: budget > Decimal::ZERO && *amount > budget,
            }
        })
        .collect();

    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Budget and actual for every category in either map, zeros included.
#[must_use]
pub fn comparison_rows(
    budgets: &CategoryAmountMap,
    actuals: &CategoryAmountMap,
) -> Vec<ComparisonRow> {
    let categories: BTreeSet<&String> = budgets.keys().chain(actuals.keys()).collect();

    categories
        .into_iter()
        .map(|category| ComparisonRow {
            category: category.clone(),
            budget: budgets.get(category).copied().unwrap_or_default(),
            actual: actuals.get(category).copied().unwrap_or_default(),
        })
        .collect()
}

/// How far the balance goes towards the saving goal.
#[must_use]
pub fn goal_progress(balance: Decimal, goal: Decimal) -> GoalProgress {
    let saved = balance.max(Decimal::ZERO);

    let achievement_percent = if goal > Decimal::ZERO {
        percent_of(saved, goal)
            .map(|percent| round_display(percent.min(Decimal::ONE_HUNDRED), 0))
            .unwrap_or_default()
    } else {
        Decimal::ZERO
    };

    GoalProgress {
        goal,
        saved,
        achievement_percent,
    }
}

/// Categories that went over budget, in ranking order.
#[must_use]
pub fn over_budget_categories(records: &[VarianceRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.status == VarianceStatus::Over)
        .map(|record| record.category.clone())
        .collect()
}

impl SavingsGrade {
    /// Grades a savings rate given in percent.
    #[must_use]
    pub fn from_rate(savings_rate: Decimal) -> Self {
        if savings_rate >= EXCELLENT_SAVINGS_RATE {
            Self::Excellent
        } else if savings_rate >= AVERAGE_SAVINGS_RATE {
            Self::Average
        } else {
            Self::Low
        }
    }
}

impl Assessment {
    /// Judges the period from its balance and the saving goal.
    #[must_use]
    pub fn evaluate(balance: Decimal, saving_goal: Decimal) -> Self {
        if balance >= saving_goal {
            Self::GoalExceeded
        } else if balance >= Decimal::ZERO {
            Self::WithinIncome
        } else {
            Self::Overspent
        }
    }
}

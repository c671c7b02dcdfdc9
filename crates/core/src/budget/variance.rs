//! Budget variance aggregation.

use std::collections::BTreeSet;

use budgetcoach_shared::types::CategoryAmountMap;
use rust_decimal::Decimal;

use super::percent::percent_of;
use super::types::{VarianceRecord, VarianceStatus};

/// Percentage reported when something was spent in a category with no budget.
///
/// Distinguishes "no budget was set for this spend" from any real ratio.
pub const UNBUDGETED_SENTINEL_PERCENTAGE: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

/// Compares normalized budgets against normalized actuals.
///
/// Produces one record per category with a nonzero budget or actual,
/// ranked by the size of the difference (largest first). Ties keep
/// category order.
#[must_use]
pub fn aggregate(budgets: &CategoryAmountMap, actuals: &CategoryAmountMap) -> Vec<VarianceRecord> {
    let categories: BTreeSet<&String> = budgets.keys().chain(actuals.keys()).collect();

    let mut records: Vec<VarianceRecord> = categories
        .into_iter()
        .filter_map(|category| {
            let budget = budgets.get(category).copied().unwrap_or_default();
            let actual = actuals.get(category).copied().unwrap_or_default();
            if budget.is_zero() && actual.is_zero() {
                return None;
            }
            Some(variance_record(category.clone(), budget, actual))
        })
        .collect();

    records.sort_by(|a, b| b.difference.abs().cmp(&a.difference.abs()));
    records
}

/// Builds the record for a single category.
fn variance_record(category: String, budget: Decimal, actual: Decimal) -> VarianceRecord {
    let difference = actual.saturating_sub(budget);

    let percentage = if budget > Decimal::ZERO {
        percent_of(actual, budget).unwrap_or_default()
    } else if actual > Decimal::ZERO {
        UNBUDGETED_SENTINEL_PERCENTAGE
    } else {
        Decimal::ZERO
    };

    let status = if difference > Decimal::ZERO {
        VarianceStatus::Over
    } else {
        VarianceStatus::Under
    };

    VarianceRecord {
        category,
        budget,
        actual,
        difference,
        percentage,
        status,
    }
}

//! Category amount maps.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` in the smallest currency unit (won).

use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// Category label -> amount.
///
/// Used for budgets and actual spending alike. Keys are unique and iterate
/// in label order.
pub type CategoryAmountMap = BTreeMap<String, Decimal>;

/// Sums every amount in the map, saturating at the `Decimal` bounds.
#[must_use]
pub fn total_amount(map: &CategoryAmountMap) -> Decimal {
    map.values()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
}

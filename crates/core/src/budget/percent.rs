//! Percentage helpers shared by the budget calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// `part / whole * 100`, or `None` when `whole` is zero.
///
/// A ratio too large for `Decimal` saturates at `Decimal::MAX` (or `MIN`
/// when the signs differ).
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }

    let percent = match part.checked_div(whole) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if part.is_sign_negative() == whole.is_sign_negative() => Decimal::MAX,
        None => Decimal::MIN,
    };
    Some(percent)
}

/// Rounds a percentage for display, halves away from zero.
#[must_use]
pub fn round_display(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

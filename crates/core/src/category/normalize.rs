//! Folding raw category maps onto the canonical taxonomy.

use budgetcoach_shared::types::CategoryAmountMap;
use rust_decimal::Decimal;

use super::alias::CategoryAliasTable;

/// Folds every raw label onto its canonical category.
///
/// Amounts of labels sharing a canonical category are summed, never
/// overwritten. Sums saturate at the `Decimal` bounds.
#[must_use]
pub fn normalize(raw: &CategoryAmountMap, aliases: &CategoryAliasTable) -> CategoryAmountMap {
    let mut normalized = CategoryAmountMap::new();
    for (label, amount) in raw {
        let canonical = aliases.resolve(label);
        let bucket = normalized
            .entry(canonical.to_string())
            .or_insert(Decimal::ZERO);
        *bucket = bucket.saturating_add(*amount);
    }
    normalized
}

//! Income / expense / savings summary.

use budgetcoach_shared::types::{CategoryAmountMap, total_amount};
use rust_decimal::Decimal;

use super::percent::{percent_of, round_display};
use super::types::{ExpenseSource, SummaryMetrics};

/// Summarizes the period from income, the reported expense and the actuals.
///
/// The sum of the normalized actuals wins over the reported expense whenever
/// it is nonzero; the reported figure is only the fallback. The savings rate
/// is rounded to one decimal and is 0 without income.
#[must_use]
pub fn summarize(
    total_income: Decimal,
    reported_expense: Decimal,
    normalized_actuals: &CategoryAmountMap,
) -> SummaryMetrics {
    let calculated_expense = total_amount(normalized_actuals);

    let (total_expense, expense_source) = if calculated_expense > Decimal::ZERO {
        (calculated_expense, ExpenseSource::Calculated)
    } else {
        (reported_expense, ExpenseSource::Reported)
    };

    let balance = total_income.saturating_sub(total_expense);

    let savings_rate = if total_income > Decimal::ZERO {
        percent_of(balance, total_income)
            .map(|rate| round_display(rate, 1))
            .unwrap_or_default()
    } else {
        Decimal::ZERO
    };

    SummaryMetrics {
        total_income,
        total_expense,
        expense_source,
        balance,
        savings_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn actuals(amount: Decimal) -> CategoryAmountMap {
        CategoryAmountMap::from([("식비".to_string(), amount)])
    }

    #[test]
    fn test_reported_expense_used_when_calculated_is_zero() {
        let metrics = summarize(dec!(1000), dec!(200), &actuals(dec!(0)));

        assert_eq!(metrics.total_expense, dec!(200));
        assert_eq!(metrics.expense_source, ExpenseSource::Reported);
        assert_eq!(metrics.balance, dec!(800));
        assert_eq!(metrics.savings_rate, dec!(80.0));
    }

    #[test]
    fn test_calculated_expense_overrides_reported() {
        let metrics = summarize(dec!(1000), dec!(200), &actuals(dec!(300)));

        assert_eq!(metrics.total_expense, dec!(300));
        assert_eq!(metrics.expense_source, ExpenseSource::Calculated);
        assert_eq!(metrics.balance, dec!(700));
        assert_eq!(metrics.savings_rate, dec!(70.0));
    }

    #[test]
    fn test_savings_rate_rounds_to_one_decimal() {
        let metrics = summarize(dec!(3000), dec!(0), &actuals(dec!(1000)));

        // 2000 / 3000 = 66.666...
        assert_eq!(metrics.savings_rate, dec!(66.7));
    }

    #[test]
    fn test_negative_savings_rate() {
        let metrics = summarize(dec!(4000000), dec!(0), &actuals(dec!(4500000)));

        assert_eq!(metrics.balance, dec!(-500000));
        assert_eq!(metrics.savings_rate, dec!(-12.5));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let huge = dec!(50000000000000000000000000000);
        let actuals = CategoryAmountMap::from([
            ("식비".to_string(), huge),
            ("쇼핑".to_string(), huge),
        ]);

        let metrics = summarize(dec!(-1000), dec!(0), &actuals);

        assert_eq!(metrics.total_expense, Decimal::MAX);
        assert_eq!(metrics.balance, Decimal::MIN);
        assert_eq!(metrics.savings_rate, dec!(0));
    }

    #[test]
    fn test_no_income() {
        let metrics = summarize(dec!(0), dec!(500), &CategoryAmountMap::new());

        assert_eq!(metrics.total_expense, dec!(500));
        assert_eq!(metrics.balance, dec!(-500));
        assert_eq!(metrics.savings_rate, dec!(0));
    }
}

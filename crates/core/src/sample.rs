//! Built-in sample dataset.
//!
//! Served only as an explicitly labelled `DataSource::Sample` report, never
//! merged with live figures.

use budgetcoach_shared::types::CategoryAmountMap;
use rust_decimal::Decimal;

use crate::report::{CoachingPlan, ReportInputs};

/// Raw budgets of the sample coaching plan.
const SAMPLE_BUDGETS: &[(&str, i64)] = &[
    ("카페", 50_000),
    ("점심식사", 200_000),
    ("업무비품", 300_000),
    ("스트레스 쇼핑", 150_000),
    ("패션", 200_000),
];

/// Raw actual spending of the sample month.
const SAMPLE_ACTUALS: &[(&str, i64)] = &[
    ("카페", 45_600),
    ("점심식사", 168_200),
    ("업무비품", 875_200),
    ("스트레스 쇼핑", 2_343_600),
    ("패션", 832_600),
];

/// Coaching tips of the sample plan.
const SAMPLE_TIPS: &[&str] = &[
    "스트레스 쇼핑을 줄이기 위해 대체 활동을 찾아보세요",
    "카페 대신 집에서 커피를 만들어 드셔보세요",
    "온라인 쇼핑 전 24시간 기다리기 규칙을 적용해보세요",
];

const SAMPLE_SAVING_GOAL: i64 = 400_000;

const SAMPLE_INCOME: i64 = 4_000_000;

fn amounts(entries: &[(&str, i64)]) -> CategoryAmountMap {
    entries
        .iter()
        .map(|(label, amount)| ((*label).to_string(), Decimal::from(*amount)))
        .collect()
}

/// The sample month: a stress-shopping heavy spender over a modest budget.
#[must_use]
pub fn sample_inputs() -> ReportInputs {
    ReportInputs {
        plan: CoachingPlan {
            budgets: amounts(SAMPLE_BUDGETS),
            saving_goal: Decimal::from(SAMPLE_SAVING_GOAL),
            tips: SAMPLE_TIPS.iter().map(|tip| (*tip).to_string()).collect(),
        },
        actuals: amounts(SAMPLE_ACTUALS),
        total_income: Decimal::from(SAMPLE_INCOME),
        reported_expense: Decimal::ZERO,
    }
}

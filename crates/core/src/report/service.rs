//! Report generation service.

use rust_decimal::Decimal;

use super::types::{BudgetReport, DataSource, ReportInputs};
use crate::budget::{
    Assessment, SavingsGrade, aggregate, category_breakdown, comparison_rows, goal_progress,
    over_budget_categories, summarize,
};
use crate::category::{CategoryAliasTable, normalize};

/// Service for building budget reports.
pub struct ReportService;

impl ReportService {
    /// Runs the whole pipeline over one set of inputs.
    ///
    /// Both maps are normalized with the same alias table before any
    /// comparison; every derived figure uses the normalized maps.
    #[must_use]
    pub fn build(
        inputs: ReportInputs,
        aliases: &CategoryAliasTable,
        data_source: DataSource,
    ) -> BudgetReport {
        let ReportInputs {
            plan,
            actuals,
            total_income,
            reported_expense,
        } = inputs;

        let budgets = normalize(&plan.budgets, aliases);
        let actuals = normalize(&actuals, aliases);

        let variance = aggregate(&budgets, &actuals);
        let summary = summarize(total_income, reported_expense, &actuals);
        let breakdown = category_breakdown(&actuals, &budgets);
        let comparison = comparison_rows(&budgets, &actuals);
        let goal = goal_progress(summary.balance, plan.saving_goal);
        let savings_grade = SavingsGrade::from_rate(summary.savings_rate);
        let assessment = Assessment::evaluate(summary.balance, plan.saving_goal);
        let over_budget = over_budget_categories(&variance);
        let has_data = !actuals.is_empty() || summary.total_expense > Decimal::ZERO;

        BudgetReport {
            data_source,
            notice: None,
            has_data,
            budgets,
            actuals,
            variance,
            summary,
            breakdown,
            comparison,
            goal,
            savings_grade,
            assessment,
            over_budget,
            tips: plan.tips,
        }
    }
}

impl BudgetReport {
    /// Attaches a message to show alongside the report.
    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

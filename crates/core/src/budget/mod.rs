//! Budget-vs-actual variance and summary metrics.

pub mod insights;
pub mod percent;
pub mod summary;
pub mod types;
pub mod variance;


pub use insights::{category_breakdown, comparison_rows, goal_progress, over_budget_categories};
pub use summary::summarize;
pub use types::{
    Assessment, CategoryShare, ComparisonRow, ExpenseSource, GoalProgress, SavingsGrade,
    SummaryMetrics, VarianceRecord, VarianceStatus,
};
pub use variance::{UNBUDGETED_SENTINEL_PERCENTAGE, aggregate};

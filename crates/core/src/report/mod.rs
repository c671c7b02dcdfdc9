//! Budget report: the full normalize -> aggregate -> summarize pipeline.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{BudgetReport, CoachingPlan, DataSource, ReportInputs};

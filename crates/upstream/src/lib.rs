//! Client for the upstream coaching/analytics API.
//!
//! This crate provides:
//! - The `AnalyticsSource` seam the gateway reads through
//! - `HttpAnalyticsClient`, the reqwest implementation
//! - Typed bodies of the `coach/`, `actuals/` and `summary/` reads
//! - Concurrent fan-out of all three reads into report inputs

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::HttpAnalyticsClient;
pub use error::FetchError;
pub use source::{AnalyticsSource, fetch_report_inputs};
pub use types::{ActualSpending, Endpoint, IncomeSummary};

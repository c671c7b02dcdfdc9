//! Shared types, errors, and configuration for Budget Coach.
//!
//! This crate provides common types used across all other crates:
//! - Category amount maps with decimal precision
//! - Validated user identifiers for upstream paths
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

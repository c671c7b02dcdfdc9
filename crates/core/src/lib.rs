//! Core business logic for Budget Coach.
//!
//! This crate contains pure business logic with ZERO web or network dependencies.
//! Every function here is a synchronous, side-effect-free computation.
//!
//! # Modules
//!
//! - `category` - Folding free-form spending labels onto budget categories
//! - `budget` - Budget-vs-actual variance, summary metrics and insights
//! - `report` - The full report pipeline over one set of inputs
//! - `sample` - Built-in sample dataset

pub mod budget;
pub mod category;
pub mod report;
pub mod sample;

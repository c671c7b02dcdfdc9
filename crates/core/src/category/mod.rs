//! Category normalization.
//!
//! Free-form spending labels ("카페", "점심식사", ...) are folded onto a small
//! fixed taxonomy of budget categories before any comparison happens.

pub mod alias;
pub mod error;
pub mod normalize;


pub use alias::CategoryAliasTable;
pub use error::AliasTableError;
pub use normalize::normalize;

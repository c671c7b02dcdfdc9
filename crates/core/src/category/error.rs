//! Alias table construction errors.

use thiserror::Error;

/// Errors raised while building a `CategoryAliasTable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasTableError {
    /// A raw label is folded into two different canonical categories.
    #[error("label '{label}' is mapped to both '{first}' and '{second}'")]
    ConflictingAlias {
        /// The raw label.
        label: String,
        /// Canonical category registered first.
        first: String,
        /// Canonical category registered second.
        second: String,
    },

    /// A label is used both as a raw alias and as a canonical category.
    #[error("label '{label}' is both an alias and a canonical category")]
    ChainedAlias {
        /// The offending label.
        label: String,
    },
}

//! Opaque user identifiers.
//!
//! Users are addressed upstream by their username, which ends up as a path
//! segment. `UserId` guarantees it is safe to use as one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUserId {
    /// Empty or whitespace only.
    #[error("user id must not be empty")]
    Empty,
    /// Contains a character that would change the upstream path.
    #[error("user id contains forbidden character {0:?}")]
    ForbiddenChar(char),
}

/// Identifier of a user on the upstream coaching/analytics API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validates and wraps a raw identifier. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUserId` if the id is empty or contains `/`, `?`, `#`,
    /// `%` or a control character.
    pub fn parse(raw: &str) -> Result<Self, InvalidUserId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidUserId::Empty);
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_control())
        {
            return Err(InvalidUserId::ForbiddenChar(c));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidUserId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

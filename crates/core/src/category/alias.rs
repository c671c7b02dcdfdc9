//! Raw label -> canonical category lookup.

use std::collections::{HashMap, HashSet};

use super::error::AliasTableError;

/// Built-in taxonomy: canonical category and the raw labels folded into it.
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    ("식비", &["점심식사", "카페", "식당", "배달"]),
    ("쇼핑", &["스트레스 쇼핑", "패션", "의류", "온라인쇼핑"]),
    ("기타", &["업무비품", "생활용품", "교통", "의료"]),
];

/// Static mapping from raw spending labels to canonical categories.
///
/// Labels absent from the table are already canonical. Every canonical
/// category is a fixed point: no canonical label is itself an alias, so
/// resolving twice gives the same answer as resolving once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAliasTable {
    aliases: HashMap<String, String>,
}

impl CategoryAliasTable {
    /// Creates an empty table (every label maps to itself).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in taxonomy of 식비 / 쇼핑 / 기타.
    #[must_use]
    pub fn builtin() -> Self {
        let mut aliases = HashMap::new();
        for (canonical, labels) in BUILTIN_GROUPS {
            for label in *labels {
                aliases.insert((*label).to_string(), (*canonical).to_string());
            }
        }
        Self { aliases }
    }

    /// Builds a table from `(canonical, raw labels)` groups.
    ///
    /// A label listed under its own canonical name is ignored.
    ///
    /// # Errors
    ///
    /// Returns `AliasTableError::ConflictingAlias` if a raw label appears
    /// under two canonical categories, and `AliasTableError::ChainedAlias`
    /// if a canonical category is also listed as a raw label.
    pub fn from_groups<I, C, L, S>(groups: I) -> Result<Self, AliasTableError>
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut aliases: HashMap<String, String> = HashMap::new();
        let mut canonicals = HashSet::new();

        for (canonical, labels) in groups {
            let canonical = canonical.into();
            for label in labels {
                let label = label.into();
                if label == canonical {
                    continue;
                }
                if let Some(first) = aliases.get(&label) {
                    if *first != canonical {
                        return Err(AliasTableError::ConflictingAlias {
                            label,
                            first: first.clone(),
                            second: canonical,
                        });
                    }
                    continue;
                }
                aliases.insert(label, canonical.clone());
            }
            canonicals.insert(canonical);
        }

        if let Some(label) = aliases.keys().find(|label| canonicals.contains(*label)) {
            return Err(AliasTableError::ChainedAlias {
                label: label.clone(),
            });
        }

        Ok(Self { aliases })
    }

    /// Resolves a raw label to its canonical category.
    #[must_use]
    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.aliases.get(label).map_or(label, String::as_str)
    }

    /// Number of raw labels with an explicit mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no label has an explicit mapping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

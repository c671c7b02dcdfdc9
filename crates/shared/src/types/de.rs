//! Serde helpers for loosely typed upstream bodies.

use serde::{Deserialize, Deserializer};

/// Deserializes an explicit `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing field and a `null` field read
/// the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Serde helpers for columns the backend may send as `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key behaves the same.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

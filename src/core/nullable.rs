//! Absent-versus-null handling for partial update payloads
//!
//! Use on an `Option<Option<T>>` field together with `#[serde(default)]`:
//! a missing key stays `None`, an explicit `null` becomes `Some(None)` and a
//! value becomes `Some(Some(value))`.

use serde::{Deserialize, Deserializer};

/// `deserialize_with` target for clearable patch fields
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

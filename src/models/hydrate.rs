//! Tolerant field readers for merging persisted JSON over defaults.
//!
//! A missing key, a wrong type or an out-of-catalog value all resolve to the supplied
//! fallback. Nothing here fails.

use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn field_or<T: DeserializeOwned>(obj: &Value, key: &str, fallback: T) -> T {
    obj.get(key)
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or(fallback)
}

/// Like `field_or`, trying each key in turn (current name first, legacy aliases after).
pub(crate) fn field_or_any<T: DeserializeOwned>(obj: &Value, keys: &[&str], fallback: T) -> T {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(|v| T::deserialize(v).ok()))
        .unwrap_or(fallback)
}

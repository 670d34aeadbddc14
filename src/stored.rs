//! Field-by-field reading of stored JSON objects.
//!
//! A blob may come from an older or newer build, or from the web app. Each
//! field is read on its own: a missing or unreadable field keeps its default
//! and the rest of the blob still loads. Keys nobody reads stay in the map.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Remove `key` from `fields` and parse it, or return `fallback`.
pub fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str, fallback: T) -> T {
    match fields.remove(key) {
        None | Some(Value::Null) => fallback,
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(field = key, error = %e, "Ignoring unreadable stored field");
                fallback
            }
        },
    }
}

/// Remove `key` from `fields` and parse it as a list, skipping unreadable
/// elements. A missing or non-list value yields `fallback`.
pub fn take_list<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
    fallback: Vec<T>,
) -> Vec<T> {
    match fields.remove(key) {
        None | Some(Value::Null) => fallback,
        Some(Value::Array(items)) => {
            let total = items.len();
            let parsed: Vec<T> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            if parsed.len() < total {
                warn!(field = key, skipped = total - parsed.len(), "Skipped unreadable stored entries");
            }
            parsed
        }
        Some(other) => {
            warn!(field = key, value = %other, "Stored field is not a list");
            fallback
        }
    }
}

/// Remove `key` from `fields` as a nested object, or an empty map.
pub fn take_object(fields: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match fields.remove(key) {
        Some(Value::Object(object)) => object,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            warn!(field = key, value = %other, "Stored field is not an object");
            Map::new()
        }
    }
}

//! Normalization of list responses
//!
//! The collection endpoint has returned both bare arrays and wrapper objects
//! over time. Anything that is not array-like is treated as an empty list.

use crate::types::FeedbackRecord;
use serde_json::Value;
use tracing::warn;

/// Wrapper keys checked before falling back to the first array-valued field
const WRAPPER_KEYS: [&str; 5] = ["data", "feedback", "items", "results", "records"];

/// Extract feedback records from a list response body
///
/// Elements that do not look like a feedback record are skipped.
pub fn normalize_records(body: Value) -> Vec<FeedbackRecord> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let key = WRAPPER_KEYS
                .iter()
                .find(|k| map.get(**k).is_some_and(Value::is_array))
                .map(|k| (*k).to_string())
                .or_else(|| {
                    map.iter()
                        .find(|(_, v)| v.is_array())
                        .map(|(k, _)| k.clone())
                });

            match key.and_then(|k| map.remove(&k)) {
                Some(Value::Array(items)) => items,
                _ => {
                    warn!("list response object has no array field; treating as empty");
                    Vec::new()
                }
            }
        }
        other => {
            warn!(kind = value_kind(&other), "list response is not array-like; treating as empty");
            Vec::new()
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index = idx, error = %e, "skipping malformed feedback record");
                None
            }
        })
        .collect()
}

/// Parse a raw response body and normalize it
///
/// A body that is not JSON at all is treated the same as a non-array body.
pub fn normalize_body(body: &str) -> Vec<FeedbackRecord> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => normalize_records(value),
        Err(e) => {
            warn!(error = %e, "list response is not JSON; treating as empty");
            Vec::new()
        }
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

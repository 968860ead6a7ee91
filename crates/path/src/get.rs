use helpkit_util::{parse_index, Value};

use crate::parse::parse_path;
use crate::types::PathStep;

/// Get a value by dotted/bracket path.
///
/// Returns `None` when any step is missing, when a step lands on something
/// that cannot be indexed, or when the path itself does not parse. Never
/// panics.
///
/// # Example
///
/// ```
/// use helpkit_path::get;
/// use helpkit_util::Value;
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": [1, 2, 3]}}));
/// assert_eq!(get(&doc, "a.b[1]"), Some(&Value::from(2)));
///
/// let empty = Value::from(json!({"a": {}}));
/// assert_eq!(get(&empty, "a.b[1]"), None);
/// ```
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    match parse_path(path) {
        Ok(steps) => get_by_path(value, &steps),
        Err(err) => {
            tracing::debug!(path, error = %err, "unparsable path resolves to nothing");
            None
        }
    }
}

/// Mutable twin of [`get`].
pub fn get_mut<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    match parse_path(path) {
        Ok(steps) => get_by_path_mut(value, &steps),
        Err(err) => {
            tracing::debug!(path, error = %err, "unparsable path resolves to nothing");
            None
        }
    }
}

/// [`get`] with a fallback for absent values.
pub fn get_or<'a>(value: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(value, path).unwrap_or(default)
}

/// Walk already-parsed steps.
///
/// Index steps on objects look up the decimal key; key steps on arrays are
/// used as indices when they are canonical decimal integers.
pub fn get_by_path<'a>(value: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = value;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), PathStep::Key(key)) => map.get(key.as_str())?,
            (Value::Object(map), PathStep::Index(index)) => map.get(&index.to_string())?,
            (Value::Array(items), PathStep::Index(index)) => items.get(*index)?,
            (Value::Array(items), PathStep::Key(key)) => items.get(parse_index(key)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable twin of [`get_by_path`].
pub fn get_by_path_mut<'a>(value: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = value;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), PathStep::Key(key)) => map.get_mut(key.as_str())?,
            (Value::Object(map), PathStep::Index(index)) => map.get_mut(&index.to_string())?,
            (Value::Array(items), PathStep::Index(index)) => items.get_mut(*index)?,
            (Value::Array(items), PathStep::Key(key)) => items.get_mut(parse_index(key)?)?,
            _ => return None,
        };
    }
    Some(current)
}

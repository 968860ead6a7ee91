use crate::kind::{type_of, Kind};
use crate::value::{Map, Value};

/// Creates a deep copy of a value.
///
/// Arrays and plain objects are rebuilt recursively, so the copy shares no
/// container with the original at any depth. Every other kind (dates,
/// regexes, functions, primitives, `null`, `undefined`) is handed back as-is;
/// regexes and functions keep pointing at the same shared instance.
///
/// # Examples
///
/// ```
/// use helpkit_util::{deep_copy, Value};
/// use serde_json::json;
///
/// let original = Value::from(json!({"props": {"name": "Jenny"}}));
/// let mut copy = deep_copy(&original);
///
/// copy.as_object_mut().unwrap()["props"]
///     .as_object_mut()
///     .unwrap()
///     .insert("name".to_string(), Value::from("Tom"));
///
/// assert_eq!(original, Value::from(json!({"props": {"name": "Jenny"}})));
/// ```
pub fn deep_copy(value: &Value) -> Value {
    match (type_of(value), value) {
        (Kind::Array, Value::Array(items)) => Value::Array(items.iter().map(deep_copy).collect()),
        (Kind::Object, Value::Object(obj)) => {
            let mut new_obj = Map::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), deep_copy(val));
            }
            Value::Object(new_obj)
        }
        _ => value.clone(),
    }
}

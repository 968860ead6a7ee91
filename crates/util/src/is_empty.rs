use crate::has_own_property::own_property_count;
use crate::value::Value;

/// Check if a value has no own property names.
///
/// Plain objects are empty when they have no keys. Arrays and strings always
/// own `length`, so they are never empty; numbers, booleans and dates own no
/// names and count as empty. `null` and `undefined` report `false` instead
/// of failing.
///
/// # Examples
///
/// ```
/// use helpkit_util::{is_empty_obj, Value};
/// use serde_json::json;
///
/// assert!(is_empty_obj(&Value::from(json!({}))));
/// assert!(!is_empty_obj(&Value::from(json!({"a": 1}))));
/// ```
pub fn is_empty_obj(value: &Value) -> bool {
    own_property_count(value) == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Map};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_is_empty_obj() {
        assert!(is_empty_obj(&Value::Object(Map::new())));
        assert!(!is_empty_obj(&Value::from(json!({"foo": "bar"}))));
    }

    #[test]
    fn test_is_empty_obj_containers_with_length() {
        assert!(!is_empty_obj(&Value::from(json!([]))));
        assert!(!is_empty_obj(&Value::from("")));
        assert!(!is_empty_obj(&Value::Function(Function::new(|_| Value::Null))));
    }

    #[test]
    fn test_is_empty_obj_primitives() {
        assert!(is_empty_obj(&Value::from(42)));
        assert!(is_empty_obj(&Value::Bool(false)));
        let date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(is_empty_obj(&Value::Date(date)));
    }

    #[test]
    fn test_is_empty_obj_nullish_is_false() {
        assert!(!is_empty_obj(&Value::Null));
        assert!(!is_empty_obj(&Value::Undefined));
    }
}

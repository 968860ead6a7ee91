use crate::value::Value;

/// Parse a canonical array index: decimal digits, no sign, no leading zero
/// (except `"0"` itself).
///
/// # Examples
///
/// ```
/// use helpkit_util::has_own_property::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("012"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index(""), None);
/// ```
pub fn parse_index(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse().ok()
}

/// Number of own property names a value carries, or `None` for
/// `null`/`undefined`, which have no properties to ask about.
///
/// Arrays and strings own one name per element plus `length`; regexes own
/// `lastIndex`; functions own `length` and `name`. Numbers, booleans and
/// dates own nothing.
pub fn own_property_count(value: &Value) -> Option<usize> {
    match value {
        Value::Undefined | Value::Null => None,
        Value::Bool(_) | Value::Number(_) | Value::Date(_) => Some(0),
        Value::String(s) => Some(s.encode_utf16().count() + 1),
        Value::Array(items) => Some(items.len() + 1),
        Value::Object(map) => Some(map.len()),
        Value::RegExp(_) => Some(1),
        Value::Function(_) => Some(2),
    }
}

/// Check if a value has an own property with the given key.
///
/// # Examples
///
/// ```
/// use helpkit_util::{has_own_property, Value};
/// use serde_json::json;
///
/// let obj = Value::from(json!({"foo": 1}));
/// assert!(has_own_property(&obj, "foo"));
/// assert!(!has_own_property(&obj, "bar"));
///
/// let arr = Value::from(json!([10, 20]));
/// assert!(has_own_property(&arr, "1"));
/// assert!(has_own_property(&arr, "length"));
/// assert!(!has_own_property(&arr, "2"));
/// ```
pub fn has_own_property(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key),
        Value::Array(items) => {
            key == "length" || parse_index(key).is_some_and(|i| i < items.len())
        }
        Value::String(s) => {
            key == "length" || parse_index(key).is_some_and(|i| i < s.encode_utf16().count())
        }
        Value::RegExp(_) => key == "lastIndex",
        Value::Function(_) => key == "length" || key == "name",
        _ => false,
    }
}

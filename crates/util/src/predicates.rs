//! Membership and shape predicates.

use std::sync::OnceLock;

use regex::Regex;

use crate::value::Value;

fn real_num_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("static real-number regex"))
}

/// Return `true` if `value` strictly equals one of `candidates`.
///
/// # Examples
///
/// ```
/// use helpkit_util::one_of;
///
/// assert!(one_of(&"Jenny", &["Tom", "Jenny", "Tomas", "Curry"]));
/// assert!(!one_of(&"Micko", &["Tom", "Jenny", "Tomas", "Curry"]));
/// assert!(!one_of(&1, &[]));
/// ```
pub fn one_of<T: PartialEq>(value: &T, candidates: &[T]) -> bool {
    for candidate in candidates {
        if candidate == value {
            return true;
        }
    }
    false
}

/// Return `true` only for array values.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Check if a string is a plain unsigned decimal: one or more digits,
/// optionally followed by a `.` and more digits.
///
/// No sign, no exponent, no leading dot.
///
/// # Examples
///
/// ```
/// use helpkit_util::is_real_num;
///
/// assert!(is_real_num("1231223"));
/// assert!(is_real_num("3.14"));
/// assert!(is_real_num("7."));
/// assert!(!is_real_num(".5"));
/// assert!(!is_real_num("111this is a string.111"));
/// ```
pub fn is_real_num(s: &str) -> bool {
    real_num_regex().is_match(s)
}

/// [`is_real_num`] over a dynamic value; anything but a string is `false`.
pub fn is_real_num_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_real_num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_of_values() {
        let candidates = vec![Value::from("a"), Value::from(1), Value::Null];
        assert!(one_of(&Value::Null, &candidates));
        assert!(one_of(&Value::from(1), &candidates));
        assert!(!one_of(&Value::Undefined, &candidates));
        assert!(!one_of(&Value::from("1"), &candidates));
    }

    #[test]
    fn test_one_of_nan_never_matches() {
        assert!(!one_of(&f64::NAN, &[f64::NAN, 1.0]));
    }

    #[test]
    fn test_is_array() {
        assert!(is_array(&Value::from(json!([1, 2, 3]))));
        assert!(!is_array(&Value::from("this is a string.")));
        assert!(!is_array(&Value::Undefined));
        assert!(!is_array(&Value::Null));
        assert!(!is_array(&Value::from(json!({"0": 1, "length": 1}))));
    }

    #[test]
    fn test_is_real_num_rejects() {
        assert!(!is_real_num(""));
        assert!(!is_real_num("-1"));
        assert!(!is_real_num("1e5"));
        assert!(!is_real_num("1.2.3"));
        assert!(!is_real_num("12a3"));
        assert!(!is_real_num(" 12"));
    }

    #[test]
    fn test_is_real_num_value() {
        assert!(is_real_num_value(&Value::from("10.25")));
        assert!(!is_real_num_value(&Value::from(10)));
        assert!(!is_real_num_value(&Value::Undefined));
    }
}

use std::cmp::Ordering;

use crate::value::Value;

fn ascending(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Sort numbers ascending, in place, and return the same slice.
///
/// `NaN` sorts after every number.
///
/// # Examples
///
/// ```
/// use helpkit_util::sort::order_arr;
///
/// let mut arr = vec![1.0, 4.0, 2.0, 3.0, 5.0];
/// assert_eq!(order_arr(&mut arr), &[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(arr, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn order_arr(arr: &mut [f64]) -> &mut [f64] {
    arr.sort_by(|a, b| ascending(*a, *b));
    arr
}

/// Sort dynamic values ascending by their numeric coercion, in place.
///
/// Values that do not coerce to a number sort last, in their original order.
pub fn order_values(arr: &mut [Value]) -> &mut [Value] {
    arr.sort_by(|a, b| ascending(a.to_number(), b.to_number()));
    arr
}

/// Sort objects ascending by the numeric value stored under `key`, in place.
///
/// Items without the key (or that are not objects) sort last.
///
/// # Examples
///
/// ```
/// use helpkit_util::{sort::order_obj_arr, Value};
/// use serde_json::json;
///
/// let mut arr = match Value::from(json!([{"value": 1}, {"value": 10}, {"value": 3}])) {
///     Value::Array(items) => items,
///     _ => unreachable!(),
/// };
/// order_obj_arr(&mut arr, "value");
/// assert_eq!(Value::Array(arr), Value::from(json!([{"value": 1}, {"value": 3}, {"value": 10}])));
/// ```
pub fn order_obj_arr<'a>(arr: &'a mut [Value], key: &str) -> &'a mut [Value] {
    arr.sort_by(|a, b| ascending(a[key].to_number(), b[key].to_number()));
    arr
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(doc: serde_json::Value) -> Vec<Value> {
        match Value::from(doc) {
            Value::Array(items) => items,
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_order_arr() {
        let mut arr = [1.0, 4.0, 2.0, 3.0, 5.0];
        order_arr(&mut arr);
        assert_eq!(arr, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_order_arr_numeric_not_lexicographic() {
        let mut arr = [10.0, 9.0, 100.0, 1.0];
        assert_eq!(order_arr(&mut arr), &[1.0, 9.0, 10.0, 100.0]);
    }

    #[test]
    fn test_order_arr_nan_last() {
        let mut arr = [f64::NAN, 2.0, -1.0];
        order_arr(&mut arr);
        assert_eq!(&arr[..2], &[-1.0, 2.0]);
        assert!(arr[2].is_nan());
    }

    #[test]
    fn test_order_values_coerces() {
        let mut arr = values(json!(["10", 9, "x", true, null]));
        order_values(&mut arr);
        assert_eq!(
            Value::Array(arr),
            Value::from(json!([null, true, 9, "10", "x"]))
        );
    }

    #[test]
    fn test_order_values_rust_float_spellings_are_not_numbers() {
        let mut arr = values(json!(["inf", 5, "-infinity", "nan", "-Infinity"]));
        order_values(&mut arr);
        assert_eq!(
            Value::Array(arr),
            Value::from(json!(["-Infinity", 5, "inf", "-infinity", "nan"]))
        );
    }

    #[test]
    fn test_order_obj_arr() {
        let mut arr = values(json!([{"value": 1}, {"value": 2}, {"value": 10}, {"value": 3}]));
        order_obj_arr(&mut arr, "value");
        assert_eq!(
            Value::Array(arr),
            Value::from(json!([{"value": 1}, {"value": 2}, {"value": 3}, {"value": 10}]))
        );
    }

    #[test]
    fn test_order_obj_arr_missing_key_last() {
        let mut arr = values(json!([{"other": 0}, {"value": 5}, 7, {"value": -1}]));
        order_obj_arr(&mut arr, "value");
        assert_eq!(arr[0]["value"], Value::from(-1));
        assert_eq!(arr[1]["value"], Value::from(5));
        assert_eq!(Value::Array(arr[2..].to_vec()), Value::from(json!([{"other": 0}, 7])));
    }
}

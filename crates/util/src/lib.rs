//! helpkit-util - small, stateless helpers over a dynamic value model.
//!
//! Type inspection, case conversion, deep copy, de-duplication and ordering,
//! date and money formatting. Every function is pure and works only on its
//! arguments, so all of them are safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use helpkit_util::{deep_copy, type_of, Kind, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"data": [1, 2, 3]}));
//! assert_eq!(type_of(&value), Kind::Object);
//! assert_eq!(deep_copy(&value), value);
//! ```

pub mod dedupe;
pub mod deep_copy;
pub mod error;
pub mod format;
pub mod has_own_property;
pub mod is_empty;
pub mod kind;
pub mod predicates;
pub mod sort;
pub mod strings;
pub mod swap;
pub mod value;

// Re-exports for convenience
pub use dedupe::dedupe;
pub use deep_copy::deep_copy;
pub use error::Error;
pub use format::{
    format_date, format_date_default, format_date_value, format_money, format_money_with,
    DateFormatOptions, MoneyOptions, DEFAULT_DATE_PATTERN,
};
pub use has_own_property::{has_own_property, own_property_count, parse_index};
pub use is_empty::is_empty_obj;
pub use kind::{type_of, Kind};
pub use predicates::{is_array, is_real_num, is_real_num_value, one_of};
pub use sort::{merge_sorted, order_arr, order_obj_arr, order_values};
pub use strings::{camelcase_to_hyphen, first_upper_case, hyphen_to_camelcase};
pub use swap::exchange_number;
pub use value::{Function, Map, RegExp, Value};

//! helpkit - pure helper functions over a dynamic value model.
//!
//! Re-exports [`helpkit_util`] and [`helpkit_path`] under one roof and hosts
//! the logic behind the `helpkit-*` command-line tools.
//!
//! ```
//! use helpkit::{camelcase_to_hyphen, format_money, get, Value};
//! use serde_json::json;
//!
//! assert_eq!(camelcase_to_hyphen("thisIsAString"), "this-is-a-string");
//! assert_eq!(format_money("1234567890"), "1,234,567,890");
//!
//! let doc = Value::from(json!({"a": {"b": [1, 2, 3]}}));
//! assert_eq!(get(&doc, "a.b[1]"), Some(&Value::from(2)));
//! ```

pub mod cli;
pub mod logging;

pub use helpkit_path::{
    format_path, get, get_by_path, get_by_path_mut, get_mut, get_or, parse_path, Path, PathError,
    PathStep,
};
pub use helpkit_util::*;

//! Safe path lookup over [`helpkit_util::Value`] trees.
//!
//! Paths use the familiar property-access shape: dotted keys with optional
//! bracketed indices, `"a.b[1]"`. Lookups never fail; a missing step simply
//! yields `None`.
//!
//! # Example
//!
//! ```
//! use helpkit_path::{get, parse_path, PathStep};
//! use helpkit_util::Value;
//! use serde_json::json;
//!
//! let path = parse_path("a.b[1]").unwrap();
//! assert_eq!(path[2], PathStep::Index(1));
//!
//! let doc = Value::from(json!({"a": {"b": [1, 2, 3]}}));
//! assert_eq!(get(&doc, "a.b[1]"), Some(&Value::from(2)));
//! ```

pub mod get;
pub mod parse;
pub mod types;

pub use get::{get, get_by_path, get_by_path_mut, get_mut, get_or};
pub use parse::{format_path, parse_path, PathError};
pub use types::{Path, PathStep};

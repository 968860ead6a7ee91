//! String utilities.
//!
//! Case conversion between camelCase and hyphen-case identifiers.

mod case;

pub use case::{camelcase_to_hyphen, first_upper_case, hyphen_to_camelcase};

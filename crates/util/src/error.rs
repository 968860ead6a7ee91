use thiserror::Error;

use crate::kind::Kind;

/// Errors raised by the fallible corners of the crate.
///
/// The helpers themselves prefer sentinels (`false`, `None`, the input
/// unchanged); these variants only come out of conversions and parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The value (or a value nested inside it) cannot be expressed as JSON.
    #[error("{kind} has no JSON representation")]
    NotJson { kind: Kind },
    #[error("unknown kind tag: {0}")]
    UnknownKind(String),
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

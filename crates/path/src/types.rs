//! Type definitions for access paths.

use std::fmt;

/// One step of an access path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Dotted segment, `a` in `a.b`.
    Key(String),
    /// Bracketed segment, `1` in `b[1]`.
    Index(usize),
}

/// A parsed access path.
pub type Path = Vec<PathStep>;

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

//! Parsing and formatting of `a.b[1]` style paths.

use helpkit_util::parse_index;
use thiserror::Error;

use crate::types::{Path, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("unclosed '[' at offset {offset}")]
    UnclosedBracket { offset: usize },
    #[error("invalid index {0:?}")]
    InvalidIndex(String),
    #[error("empty path step at offset {offset}")]
    EmptyStep { offset: usize },
    #[error("unexpected character after ']' at offset {offset}")]
    UnexpectedChar { offset: usize },
}

/// Parse a dotted/bracket access path into steps.
///
/// Keys are separated by `.`; any key may be followed by one or more
/// `[n]` index suffixes, and a path may start with an index. The empty
/// string is the root path.
///
/// # Errors
///
/// - [`PathError::EmptyStep`] for `a..b`, `.a` or `a.`
/// - [`PathError::UnclosedBracket`] for `a[1`
/// - [`PathError::InvalidIndex`] for `a[x]`, `a[]` or `a[01]`
/// - [`PathError::UnexpectedChar`] for `a[1]b`
///
/// # Example
///
/// ```
/// use helpkit_path::{parse_path, PathStep};
///
/// assert_eq!(
///     parse_path("a.b[1]").unwrap(),
///     vec![PathStep::from("a"), PathStep::from("b"), PathStep::Index(1)]
/// );
/// assert!(parse_path("").unwrap().is_empty());
/// assert!(parse_path("a[1").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    let mut steps = Path::new();
    if path.is_empty() {
        return Ok(steps);
    }

    let bytes = path.as_bytes();
    let mut pos = 0;
    loop {
        let key_end = path[pos..]
            .find(|c: char| c == '.' || c == '[')
            .map_or(path.len(), |i| pos + i);
        if key_end > pos {
            steps.push(PathStep::Key(path[pos..key_end].to_string()));
        } else if pos != 0 || bytes[pos] != b'[' {
            return Err(PathError::EmptyStep { offset: pos });
        }
        pos = key_end;

        while bytes.get(pos) == Some(&b'[') {
            let close = path[pos + 1..]
                .find(']')
                .map(|i| pos + 1 + i)
                .ok_or(PathError::UnclosedBracket { offset: pos })?;
            let inner = &path[pos + 1..close];
            let index = parse_index(inner).ok_or_else(|| PathError::InvalidIndex(inner.to_string()))?;
            steps.push(PathStep::Index(index));
            pos = close + 1;
        }

        match bytes.get(pos) {
            None => return Ok(steps),
            Some(b'.') => pos += 1,
            Some(_) => return Err(PathError::UnexpectedChar { offset: pos }),
        }
    }
}

/// Format steps back into a path string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use helpkit_path::{format_path, PathStep};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["a".into(), "b".into(), PathStep::Index(1)]), "a.b[1]");
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 && matches!(step, PathStep::Key(_)) {
            out.push('.');
        }
        out.push_str(&step.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> PathStep {
        PathStep::from(k)
    }

    #[test]
    fn test_parse_dotted() {
        assert_eq!(parse_path("a").unwrap(), vec![key("a")]);
        assert_eq!(parse_path("a.b.c").unwrap(), vec![key("a"), key("b"), key("c")]);
    }

    #[test]
    fn test_parse_brackets() {
        assert_eq!(
            parse_path("a.b[1]").unwrap(),
            vec![key("a"), key("b"), PathStep::Index(1)]
        );
        assert_eq!(
            parse_path("m[0][12].x").unwrap(),
            vec![key("m"), PathStep::Index(0), PathStep::Index(12), key("x")]
        );
        assert_eq!(parse_path("[3].a").unwrap(), vec![PathStep::Index(3), key("a")]);
    }

    #[test]
    fn test_parse_numeric_key_stays_key() {
        assert_eq!(parse_path("a.0").unwrap(), vec![key("a"), key("0")]);
    }

    #[test]
    fn test_parse_unicode_keys() {
        assert_eq!(parse_path("café.名前").unwrap(), vec![key("café"), key("名前")]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_path("a..b"), Err(PathError::EmptyStep { offset: 2 }));
        assert_eq!(parse_path(".a"), Err(PathError::EmptyStep { offset: 0 }));
        assert_eq!(parse_path("a."), Err(PathError::EmptyStep { offset: 2 }));
        assert_eq!(parse_path("a.[0]"), Err(PathError::EmptyStep { offset: 2 }));
        assert_eq!(parse_path("a[1"), Err(PathError::UnclosedBracket { offset: 1 }));
        assert_eq!(parse_path("a[x]"), Err(PathError::InvalidIndex("x".to_string())));
        assert_eq!(parse_path("a[]"), Err(PathError::InvalidIndex(String::new())));
        assert_eq!(parse_path("a[01]"), Err(PathError::InvalidIndex("01".to_string())));
        assert_eq!(parse_path("a[1]b"), Err(PathError::UnexpectedChar { offset: 4 }));
    }

    #[test]
    fn test_format_round_trip() {
        for path in ["a", "a.b[1]", "[0].x", "m[0][12].x"] {
            assert_eq!(format_path(&parse_path(path).unwrap()), path);
        }
    }
}

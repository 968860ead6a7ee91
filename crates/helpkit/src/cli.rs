//! Core logic of the `helpkit-*` binaries.
//!
//! Each tool is a thin `main` around one of these functions so the behaviour
//! can be tested without spawning processes:
//! - `helpkit-case`  - camelCase / hyphen-case / first-letter conversion
//! - `helpkit-money` - thousands grouping
//! - `helpkit-get`   - path lookup in a JSON document read from stdin
//! - `helpkit-date`  - token-pattern date formatting

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use helpkit_path::{parse_path, PathError};
use helpkit_util::{
    camelcase_to_hyphen, first_upper_case, format_date, format_money, hyphen_to_camelcase, Value,
    DEFAULT_DATE_PATTERN,
};
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Value(#[from] helpkit_util::Error),
    #[error("{0}")]
    Path(#[from] PathError),
    #[error("NOT_FOUND")]
    NotFound,
    #[error("{0}")]
    Usage(String),
    #[error("Unrecognised date: {0}")]
    InvalidDate(String),
}

// ── helpkit-case ──────────────────────────────────────────────────────────

/// Apply a named case conversion (`to-hyphen`, `to-camel`, `first-upper`).
pub fn convert_case(mode: &str, text: &str) -> Result<String, CliError> {
    match mode {
        "to-hyphen" => Ok(camelcase_to_hyphen(text)),
        "to-camel" => Ok(hyphen_to_camelcase(text)),
        "first-upper" => Ok(first_upper_case(text)),
        other => Err(CliError::Usage(format!(
            "Unknown mode: {other} (expected to-hyphen, to-camel or first-upper)"
        ))),
    }
}

// ── helpkit-money ─────────────────────────────────────────────────────────

/// Group the digits of a money amount.
pub fn group_money(amount: &str) -> String {
    format_money(amount.trim())
}

// ── helpkit-get ───────────────────────────────────────────────────────────

/// Look up `path` in a JSON document.
///
/// Returns the found value as pretty-printed JSON. Malformed paths are
/// reported as path errors here, unlike the silent library `get`.
pub fn lookup_path(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc = Value::from_json_str(doc_json)?;
    let steps = parse_path(path)?;
    let found = helpkit_path::get_by_path(&doc, &steps).ok_or(CliError::NotFound)?;
    Ok(serde_json::to_string_pretty(&found.to_json()?)?)
}

// ── helpkit-date ──────────────────────────────────────────────────────────

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse the date argument accepted by `helpkit-date`.
///
/// RFC 3339 timestamps keep their own wall-clock time; naive date-times and
/// bare dates (midnight) are accepted in `-` or `/` separated forms.
pub fn parse_date_arg(input: &str) -> Result<NaiveDateTime, CliError> {
    let input = input.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(date);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date.and_time(NaiveTime::default()));
        }
    }
    tracing::debug!(input, "no date format matched");
    Err(CliError::InvalidDate(input.to_string()))
}

/// Format `date` (or the current local time) with `pattern` (or `yyyy-MM-dd`).
pub fn format_date_arg(date: Option<&str>, pattern: Option<&str>) -> Result<String, CliError> {
    let date = match date {
        Some(input) => parse_date_arg(input)?,
        None => Local::now().naive_local(),
    };
    Ok(format_date(&date, pattern.unwrap_or(DEFAULT_DATE_PATTERN)))
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_modes() {
        assert_eq!(convert_case("to-hyphen", "thisIsAString").unwrap(), "this-is-a-string");
        assert_eq!(convert_case("to-camel", "this-is-a-string").unwrap(), "thisIsAString");
        assert_eq!(convert_case("first-upper", "abc").unwrap(), "Abc");
    }

    #[test]
    fn case_unknown_mode() {
        let err = convert_case("shout", "abc").unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert!(err.to_string().contains("shout"));
    }

    #[test]
    fn money_trims_input() {
        assert_eq!(group_money(" 1234567890\n"), "1,234,567,890");
    }

    #[test]
    fn lookup_nested() {
        let doc = r#"{"a":{"b":[1,2,3]}}"#;
        assert_eq!(lookup_path(doc, "a.b[1]").unwrap(), "2");
    }

    #[test]
    fn lookup_object_pretty() {
        let doc = r#"{"a":{"b":1}}"#;
        let out = lookup_path(doc, "a").unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["b"], 1);
    }

    #[test]
    fn lookup_not_found() {
        let err = lookup_path(r#"{"a":{}}"#, "a.b[1]").unwrap_err();
        assert!(matches!(err, CliError::NotFound));
        assert_eq!(err.to_string(), "NOT_FOUND");
    }

    #[test]
    fn lookup_bad_inputs() {
        assert!(matches!(lookup_path("{", "a"), Err(CliError::Value(_))));
        assert!(matches!(lookup_path("{}", "a[1"), Err(CliError::Path(_))));
    }

    #[test]
    fn date_formats() {
        assert_eq!(
            format_date_arg(Some("2019/08/18"), Some("yyyy-MM-dd hh:mm:ss")).unwrap(),
            "2019-08-18 00:00:00"
        );
        assert_eq!(
            format_date_arg(Some("2019-08-18T07:05:09.250+02:00"), Some("hh:mm:ss.SSS")).unwrap(),
            "07:05:09.250"
        );
        assert_eq!(format_date_arg(Some("2020-02-29 13:00:00"), None).unwrap(), "2020-02-29");
    }

    #[test]
    fn date_now_uses_default_pattern() {
        let out = format_date_arg(None, None).unwrap();
        assert_eq!(out.len(), "yyyy-MM-dd".len());
    }

    #[test]
    fn date_invalid() {
        assert!(matches!(
            format_date_arg(Some("yesterday"), None),
            Err(CliError::InvalidDate(_))
        ));
    }
}

use chrono::{Datelike, Timelike};
use serde::Deserialize;

use crate::value::Value;

/// Pattern used when the caller does not pick one.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";

/// Options for date formatting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateFormatOptions {
    /// Token pattern. Default is `yyyy-MM-dd`.
    pub pattern: String,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

impl DateFormatOptions {
    pub fn format<D: Datelike + Timelike>(&self, date: &D) -> String {
        format_date(date, &self.pattern)
    }
}

/// Format a date by substituting tokens in `pattern`.
///
/// | token | field |
/// |-------|-------|
/// | `y+` (either case) | year; runs shorter than 4 keep the rightmost digits |
/// | `M+` | month, 1-based |
/// | `d+` | day of month |
/// | `h+` | hour, 0-23 |
/// | `m+` | minute |
/// | `s+` | second |
/// | `q+` | quarter, 1-4 |
/// | `S+` | millisecond |
///
/// Only the first run of each token is replaced. A run of one letter gives
/// the bare number; longer runs zero-pad to two digits (three for `S`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use helpkit_util::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2019, 8, 18).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(format_date(&date, "yyyy-MM-dd hh:mm:ss"), "2019-08-18 00:00:00");
/// assert_eq!(format_date(&date, "yy/M/d"), "19/8/18");
/// ```
pub fn format_date<D: Datelike + Timelike>(date: &D, pattern: &str) -> String {
    let mut out = replace_first_run(pattern, |c| c.eq_ignore_ascii_case(&'y'), |width| {
        year_digits(date.year(), width)
    });

    let millis = (date.nanosecond() / 1_000_000).min(999);
    let fields: [(char, u32, usize); 7] = [
        ('M', date.month(), 2),
        ('d', date.day(), 2),
        ('h', date.hour(), 2),
        ('m', date.minute(), 2),
        ('s', date.second(), 2),
        ('q', date.month0() / 3 + 1, 2),
        ('S', millis, 3),
    ];
    for (token, value, pad) in fields {
        out = replace_first_run(&out, |c| c == token, |width| {
            if width == 1 {
                value.to_string()
            } else {
                format!("{value:0pad$}")
            }
        });
    }
    out
}

/// [`format_date`] with [`DEFAULT_DATE_PATTERN`].
pub fn format_date_default<D: Datelike + Timelike>(date: &D) -> String {
    format_date(date, DEFAULT_DATE_PATTERN)
}

/// [`format_date`] over a dynamic value; `None` unless it holds a date.
pub fn format_date_value(value: &Value, pattern: &str) -> Option<String> {
    value.as_date().map(|date| format_date(date, pattern))
}

fn year_digits(year: i32, width: usize) -> String {
    let full = format!("{year:04}");
    if width >= 4 {
        full
    } else {
        full[full.len() - width..].to_string()
    }
}

// Tokens are ASCII, so a run's char count equals its byte length.
fn replace_first_run(
    input: &str,
    is_token: impl Fn(char) -> bool,
    render: impl FnOnce(usize) -> String,
) -> String {
    let Some(start) = input.find(|c: char| is_token(c)) else {
        return input.to_string();
    };
    let width = input[start..].chars().take_while(|c| is_token(*c)).count();
    let end = start + width;

    let rendered = render(width);
    let mut out = String::with_capacity(input.len() - width + rendered.len());
    out.push_str(&input[..start]);
    out.push_str(&rendered);
    out.push_str(&input[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    #[test]
    fn test_format_date_midnight() {
        let date = at(2019, 8, 18, 0, 0, 0, 0);
        assert_eq!(format_date(&date, "yyyy-MM-dd hh:mm:ss"), "2019-08-18 00:00:00");
    }

    #[test]
    fn test_format_date_default_pattern() {
        let date = at(2021, 1, 5, 13, 4, 9, 0);
        assert_eq!(format_date_default(&date), "2021-01-05");
        assert_eq!(DateFormatOptions::default().format(&date), "2021-01-05");
    }

    #[test]
    fn test_format_date_single_letter_tokens_unpadded() {
        let date = at(2021, 1, 5, 7, 4, 9, 0);
        assert_eq!(format_date(&date, "M/d h:m:s"), "1/5 7:4:9");
    }

    #[test]
    fn test_format_date_year_widths() {
        let date = at(2019, 8, 18, 0, 0, 0, 0);
        assert_eq!(format_date(&date, "y"), "9");
        assert_eq!(format_date(&date, "yy"), "19");
        assert_eq!(format_date(&date, "yyy"), "019");
        assert_eq!(format_date(&date, "YYYY"), "2019");
        assert_eq!(format_date(&date, "yyyyy"), "2019");
    }

    #[test]
    fn test_format_date_five_digit_year_is_not_truncated() {
        let date = at(10000, 1, 2, 0, 0, 0, 0);
        assert_eq!(format_date(&date, "yyyy"), "10000");
        assert_eq!(format_date(&date, "yyyy-MM-dd"), "10000-01-02");
        assert_eq!(format_date(&date, "yy"), "00");
    }

    #[test]
    fn test_format_date_quarter_and_millis() {
        let date = at(2020, 11, 30, 23, 59, 58, 7);
        assert_eq!(format_date(&date, "q"), "4");
        assert_eq!(format_date(&date, "qq"), "04");
        assert_eq!(format_date(&date, "S"), "7");
        assert_eq!(format_date(&date, "SSS"), "007");
        assert_eq!(format_date(&at(2020, 3, 1, 0, 0, 0, 0), "q"), "1");
        assert_eq!(format_date(&at(2020, 4, 1, 0, 0, 0, 0), "q"), "2");
    }

    #[test]
    fn test_format_date_only_first_run_replaced() {
        let date = at(2019, 8, 18, 0, 0, 0, 0);
        assert_eq!(format_date(&date, "dd-dd"), "18-dd");
    }

    #[test]
    fn test_format_date_literal_text_kept() {
        let date = at(2019, 8, 18, 10, 30, 0, 0);
        assert_eq!(format_date(&date, "at hh:mm!"), "at 10:30!");
        assert_eq!(format_date(&date, ""), "");
    }

    #[test]
    fn test_format_date_value() {
        let date = at(2019, 8, 18, 0, 0, 0, 0);
        assert_eq!(
            format_date_value(&Value::Date(date), "yyyy"),
            Some("2019".to_string())
        );
        assert_eq!(format_date_value(&Value::from("2019-08-18"), "yyyy"), None);
    }

    #[test]
    fn test_options_deserialize() {
        let opts: DateFormatOptions = serde_json::from_str(r#"{"pattern": "dd/MM"}"#).unwrap();
        assert_eq!(opts.pattern, "dd/MM");
        let defaults: DateFormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, DateFormatOptions::default());
    }
}

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn upper_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("([A-Z])").expect("static upper-case regex"))
}

fn hyphen_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("-([A-Za-z0-9_])").expect("static hyphen regex"))
}

/// Convert a camelCase identifier to hyphen-case.
///
/// A hyphen goes in front of every ASCII upper-case letter, then the whole
/// string is lower-cased. A leading capital therefore produces a leading
/// hyphen.
///
/// # Examples
///
/// ```
/// use helpkit_util::strings::camelcase_to_hyphen;
///
/// assert_eq!(camelcase_to_hyphen("thisIsAString"), "this-is-a-string");
/// assert_eq!(camelcase_to_hyphen("FooBar"), "-foo-bar");
/// ```
pub fn camelcase_to_hyphen(s: &str) -> String {
    upper_regex().replace_all(s, "-$1").to_lowercase()
}

/// Convert a hyphen-case identifier to camelCase.
///
/// Each hyphen followed by a word character is dropped and the character
/// upper-cased. Other hyphens are kept.
///
/// # Examples
///
/// ```
/// use helpkit_util::strings::hyphen_to_camelcase;
///
/// assert_eq!(hyphen_to_camelcase("this-is-a-string"), "thisIsAString");
/// assert_eq!(hyphen_to_camelcase("trailing-"), "trailing-");
/// ```
pub fn hyphen_to_camelcase(s: &str) -> String {
    hyphen_regex()
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Upper-case the first character and leave the rest untouched.
///
/// # Examples
///
/// ```
/// use helpkit_util::strings::first_upper_case;
///
/// assert_eq!(first_upper_case("abc"), "Abc");
/// assert_eq!(first_upper_case(""), "");
/// ```
pub fn first_upper_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

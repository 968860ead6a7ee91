use serde::Deserialize;

/// Options for money formatting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MoneyOptions {
    /// Inserted between digit groups. Default is `","`.
    pub separator: String,
    /// Digits per group, counted from the right. Default is 3.
    pub group: usize,
    /// Marks the start of the fractional part, which is never grouped.
    /// Default is `'.'`.
    pub decimal: char,
}

impl Default for MoneyOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            group: 3,
            decimal: '.',
        }
    }
}

/// Insert a thousands separator every three digits of the integer part.
///
/// # Examples
///
/// ```
/// use helpkit_util::format_money;
///
/// assert_eq!(format_money("1234567890"), "1,234,567,890");
/// assert_eq!(format_money("-1234.5678"), "-1,234.5678");
/// assert_eq!(format_money("12ab"), "12ab");
/// ```
pub fn format_money(money: &str) -> String {
    format_money_with(money, &MoneyOptions::default())
}

/// Group the integer digits of `money` according to `options`.
///
/// An optional leading `+`/`-` is kept, the fractional part after
/// `options.decimal` is copied verbatim, and input whose integer part is not
/// made only of ASCII digits is returned unchanged.
pub fn format_money_with(money: &str, options: &MoneyOptions) -> String {
    let sign_len = usize::from(money.starts_with(&['-', '+'][..]));
    let (sign, unsigned) = money.split_at(sign_len);
    let (integer, fraction) = match unsigned.find(options.decimal) {
        Some(at) => unsigned.split_at(at),
        None => (unsigned, ""),
    };

    if integer.is_empty() || options.group == 0 || !integer.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(input = money, "money input left unformatted");
        return money.to_string();
    }

    let groups = (integer.len() - 1) / options.group;
    let mut out =
        String::with_capacity(money.len() + groups * options.separator.len());
    out.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % options.group == 0 {
            out.push_str(&options.separator);
        }
        out.push(digit);
    }
    out.push_str(fraction);
    out
}

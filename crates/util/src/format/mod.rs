//! Date and money formatting.

mod date;
mod money;

pub use date::{
    format_date, format_date_default, format_date_value, DateFormatOptions, DEFAULT_DATE_PATTERN,
};
pub use money::{format_money, format_money_with, MoneyOptions};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::value::Value;

/// The intrinsic runtime classification of a [`Value`].
///
/// Every value maps to exactly one kind. The string form of each kind is the
/// lower camel-case tag (`"boolean"`, `"regExp"`, ...), which is also what
/// serde reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Kind {
    Boolean,
    Number,
    String,
    Function,
    Array,
    Date,
    RegExp,
    Undefined,
    Null,
    Object,
}

impl Kind {
    /// All kinds, in tag-table order.
    pub const ALL: [Kind; 10] = [
        Kind::Boolean,
        Kind::Number,
        Kind::String,
        Kind::Function,
        Kind::Array,
        Kind::Date,
        Kind::RegExp,
        Kind::Undefined,
        Kind::Null,
        Kind::Object,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Function => "function",
            Kind::Array => "array",
            Kind::Date => "date",
            Kind::RegExp => "regExp",
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// Classify a value by its variant tag.
///
/// Shape never matters: an array is always [`Kind::Array`], never
/// [`Kind::Object`], and an empty object is still [`Kind::Object`].
///
/// # Examples
///
/// ```
/// use helpkit_util::{type_of, Kind, Value};
///
/// assert_eq!(type_of(&Value::from(false)), Kind::Boolean);
/// assert_eq!(type_of(&Value::Array(vec![])), Kind::Array);
/// assert_eq!(type_of(&Value::Undefined).to_string(), "undefined");
/// ```
pub fn type_of(value: &Value) -> Kind {
    match value {
        Value::Undefined => Kind::Undefined,
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
        Value::Date(_) => Kind::Date,
        Value::RegExp(_) => Kind::RegExp,
        Value::Function(_) => Kind::Function,
    }
}

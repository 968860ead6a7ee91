use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use regex::Regex;

use crate::error::Error;
use crate::kind::{type_of, Kind};

/// Ordered key-value mapping used for [`Value::Object`].
pub type Map = IndexMap<String, Value>;

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A dynamically-typed value.
///
/// Covers the JSON data model plus the runtime-only kinds a loosely-typed
/// host juggles: `undefined`, dates, regular expressions and callables.
///
/// Equality is strict equality: numbers compare as IEEE doubles (so `NaN`
/// never equals itself), functions compare by identity, regexes by source,
/// and arrays/objects element-wise since an owned tree has no identity of
/// its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Date(NaiveDateTime),
    RegExp(RegExp),
    Function(Function),
}

/// A shared callable. Clones point at the same closure.
#[derive(Clone)]
pub struct Function(Arc<NativeFn>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Whether both handles point at the same closure.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}

/// A shared compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegExp(Arc<Regex>);

impl RegExp {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Ok(Self(Arc::new(Regex::new(pattern)?)))
    }

    pub fn source(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    pub fn ptr_eq(&self, other: &RegExp) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for RegExp {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl From<Regex> for RegExp {
    fn from(regex: Regex) -> Self {
        Self(Arc::new(regex))
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        type_of(self)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Numeric coercion used by the ordering helpers.
    ///
    /// Strings are trimmed and parsed (empty means `0`), booleans become
    /// `1`/`0`, `null` is `0`, dates are epoch milliseconds, and everything
    /// else is `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Null => 0.0,
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed {
                    "" => 0.0,
                    "Infinity" | "+Infinity" => f64::INFINITY,
                    "-Infinity" => f64::NEG_INFINITY,
                    // `str::parse` also takes `inf`/`nan` in any case.
                    _ if trimmed
                        .contains(|c: char| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) =>
                    {
                        f64::NAN
                    }
                    _ => trimmed.parse().unwrap_or(f64::NAN),
                }
            }
            Value::Date(date) => date.and_utc().timestamp_millis() as f64,
            _ => f64::NAN,
        }
    }

    /// Parse a JSON document into a value.
    pub fn from_json_str(json: &str) -> Result<Value, Error> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::from(parsed))
    }

    /// Convert into JSON, failing on kinds JSON cannot carry.
    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        serde_json::Value::try_from(self)
    }
}

static UNDEFINED: Value = Value::Undefined;

/// Missing keys, non-objects and out-of-range indices read as `undefined`.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items.get(index).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut map = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    map.insert(key, Value::from(val));
                }
                Value::Object(map)
            }
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(json_number(*n)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => {
                let mut obj = serde_json::Map::with_capacity(map.len());
                for (key, val) in map {
                    obj.insert(key.clone(), serde_json::Value::try_from(val)?);
                }
                serde_json::Value::Object(obj)
            }
            other => {
                tracing::debug!(kind = %other.kind(), "value has no JSON representation");
                return Err(Error::NotJson { kind: other.kind() });
            }
        })
    }
}

// Whole numbers inside the exact-integer range keep an integer encoding.
fn json_number(n: f64) -> Result<serde_json::Number, Error> {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        return Ok(serde_json::Number::from(n as i64));
    }
    serde_json::Number::from_f64(n).ok_or_else(|| {
        tracing::debug!(number = n, "non-finite number has no JSON representation");
        Error::NotJson { kind: Kind::Number }
    })
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(date: NaiveDateTime) -> Self {
        Value::Date(date)
    }
}

impl From<RegExp> for Value {
    fn from(regex: RegExp) -> Self {
        Value::RegExp(regex)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

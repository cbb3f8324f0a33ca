//! Structured key-value attachments carried alongside a log message.
//!
//! Keys are kept sorted so both renderers produce deterministic output.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single attachment value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Arrays and objects, rendered as compact JSON
    Nested(serde_json::Value),
}

impl AttachmentValue {
    /// Text value taken from any `Display` type (errors, paths, ids).
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Append the string-built JSON form: text is quoted but not escaped.
    pub(crate) fn write_json_unescaped(&self, out: &mut String) {
        match self {
            Self::Text(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
            other => out.push_str(&other.to_string()),
        }
    }
}

impl fmt::Display for AttachmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Nested(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for AttachmentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::UInt(n) => serializer.serialize_u64(*n),
            // serde_json silently writes NaN/inf as null; refuse instead.
            Self::Float(x) if !x.is_finite() => {
                Err(S::Error::custom(format!("unsupported value: {x}")))
            }
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Nested(v) => v.serialize(serializer),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for AttachmentValue {
                fn from(n: $t) -> Self {
                    Self::$variant(n as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64: u8, u16, u32, u64, usize);

impl From<f32> for AttachmentValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for AttachmentValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for AttachmentValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for AttachmentValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttachmentValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for AttachmentValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl<T: Into<AttachmentValue>> From<Option<T>> for AttachmentValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for AttachmentValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::Text(s),
            nested => Self::Nested(nested),
        }
    }
}

/// Named values attached to one log call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attachments(BTreeMap<String, AttachmentValue>);

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttachmentValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttachmentValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttachmentValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttachmentValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Attachments
where
    K: Into<String>,
    V: Into<AttachmentValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attachments = Self::new();
        attachments.extend(iter);
        attachments
    }
}

impl<K, V> Extend<(K, V)> for Attachments
where
    K: Into<String>,
    V: Into<AttachmentValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

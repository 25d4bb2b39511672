/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dynamic field values.
//!
//! A [`Record`] holds the decoded content of one block: fixed fields, nested
//! groups and var data, in schema order.

use binance_sbe_schema::ScalarValue;
use bytes::Bytes;
use serde::Serialize;

/// Value of a single field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Value {
    /// Null sentinel, or a field absent from the acting version.
    #[default]
    Null,
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
    /// Enumeration code, with its name when the schema knows it.
    Enum {
        /// Wire code.
        code: u64,
        /// Value name.
        name: Option<&'static str>,
    },
    /// Choice set bits.
    Set(u64),
    /// Fixed-length byte array.
    Array(Vec<u8>),
    /// UTF-8 var data.
    String(String),
    /// Binary var data, or string data that failed UTF-8 validation.
    Bytes(Bytes),
    /// Repeating group entries.
    Group(Vec<Record>),
}

impl Value {
    /// Returns the numeric content, if any.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<ScalarValue> {
        match self {
            Self::Int(v) => Some(ScalarValue::Int(*v)),
            Self::UInt(v) => Some(ScalarValue::UInt(*v)),
            Self::Float(v) => Some(ScalarValue::Float(*v)),
            _ => None,
        }
    }

    /// Returns the signed integer content.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the unsigned integer content.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string content.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the enumeration name.
    #[must_use]
    pub const fn enum_name(&self) -> Option<&'static str> {
        match self {
            Self::Enum { name, .. } => *name,
            _ => None,
        }
    }

    /// Returns the group entries.
    #[must_use]
    pub fn as_group(&self) -> Option<&[Record]> {
        match self {
            Self::Group(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Int(v) => Self::Int(v),
            ScalarValue::UInt(v) => Self::UInt(v),
            ScalarValue::Float(v) => Self::Float(v),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Record>> for Value {
    fn from(entries: Vec<Record>) -> Self {
        Self::Group(entries)
    }
}

/// Ordered set of named values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record {
    entries: Vec<(&'static str, Value)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty record with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn insert(&mut self, name: &'static str, value: impl Into<Value>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Record::insert`].
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Iterates over the values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

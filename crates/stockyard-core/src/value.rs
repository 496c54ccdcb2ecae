//! Typed values exchanged between the core and the drivers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// SQL column types supported by the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlType {
    /// 64-bit signed integer.
    Integer,
    /// Variable-length text.
    Text,
    /// Date and time at whole-second granularity.
    Timestamp,
}

impl SqlType {
    /// SQL name of the type, as used in diagnostics.
    #[must_use]
    pub const fn sql_name(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Text => "TEXT",
            SqlType::Timestamp => "TIMESTAMP",
        }
    }
}

/// A dynamically typed SQL value.
///
/// `Value` is the exchange type between [`Row`](crate::Row)s produced by a
/// driver and the typed [`Field`](crate::Field)s on an entity. `Null` stands
/// both for SQL NULL in results and for absent field content when composing
/// statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL / absent content.
    Null,
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
    /// Timestamp value, whole-second granularity.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Whether this value is SQL NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The type tag of this value, `None` for NULL.
    #[must_use]
    pub fn sql_type(&self) -> Option<SqlType> {
        match self {
            Value::Null => None,
            Value::Int(_) => Some(SqlType::Integer),
            Value::Text(_) => Some(SqlType::Text),
            Value::Timestamp(_) => Some(SqlType::Timestamp),
        }
    }

    /// Integer content, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Timestamp content, if this is a timestamp value.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

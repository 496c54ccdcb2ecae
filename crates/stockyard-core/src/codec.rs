//! Per-backend value formatting and extraction rules.

use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;

/// Quote a text value as a SQL string literal, doubling embedded quotes.
///
/// `O'Brien` becomes `'O''Brien'`. Escaping is unconditional: unescaped
/// quotes would produce malformed SQL.
#[must_use]
pub fn quote_text(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Literal formatting and row extraction rules for one SQL dialect.
///
/// Codecs are pure: they own no connection state and have no side effects.
/// The two halves of the contract are [`format`](ValueCodec::format), used
/// when composing statement text from field content, and
/// [`read`](ValueCodec::read), used by the row-parsing loop.
pub trait ValueCodec {
    /// Format a typed value as SQL literal text.
    ///
    /// Absent content ([`Value::Null`]) always formats to the backend's NULL
    /// literal, never to an empty string.
    fn format(&self, value: &Value) -> String;

    /// Extract a column value from a result row.
    ///
    /// A column that is missing from the result schema is a [`Error::Parse`]:
    /// the statement selected columns the entity declares, so absence means
    /// the schema and the descriptor disagree. A present column holding SQL
    /// NULL is a valid [`Value::Null`].
    fn read(&self, row: &Row, column: &str) -> Result<Value> {
        match row.ordinal(column) {
            Some(index) => Ok(row.value(index).cloned().unwrap_or(Value::Null)),
            None => Err(Error::Parse(format!(
                "column `{column}` missing from result schema"
            ))),
        }
    }
}

/// Default ANSI literal rules.
///
/// Integers render as unquoted decimal, text as quoted and escaped, and
/// timestamps as `'YYYY-MM-DD HH:MM:SS'`. Backend codecs delegate here and
/// override only what their dialect changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiCodec;

impl ValueCodec for AnsiCodec {
    fn format(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Text(s) => quote_text(s),
            Value::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

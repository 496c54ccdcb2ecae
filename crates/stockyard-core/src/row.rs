//! Result rows returned by drivers.

use crate::value::Value;

/// One result row: an ordered set of named column values.
///
/// `Row` is the concrete shape behind the driver cursor contract: column
/// lookup by name (`ordinal`), NULL inspection by index, and typed getters.
/// Column name matching is exact; drivers are expected to report names as
/// the backend returns them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named column value, builder style.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.push(name.into());
        self.values.push(value.into());
        self
    }

    /// Number of columns in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column by name, `None` when the column is not part of the
    /// result schema.
    #[must_use]
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether the value at `index` is SQL NULL. Out-of-range indexes report
    /// `true`.
    #[must_use]
    pub fn is_null(&self, index: usize) -> bool {
        self.values.get(index).is_none_or(Value::is_null)
    }

    /// The value at `index`, if in range.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Typed getter: integer column by name.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.ordinal(name)
            .and_then(|i| self.values[i].as_int())
    }

    /// Typed getter: text column by name.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.ordinal(name)
            .and_then(|i| self.values[i].as_text())
    }

    /// Typed getter: timestamp column by name.
    #[must_use]
    pub fn get_timestamp(&self, name: &str) -> Option<chrono::NaiveDateTime> {
        self.ordinal(name)
            .and_then(|i| self.values[i].as_timestamp())
    }
}

/// An ordered sequence of result rows.
///
/// Drivers materialize their cursor into `Rows`; the database core drains it
/// with [`Rows::read_next`] while running the per-row parser.
#[derive(Debug, Default)]
pub struct Rows {
    rows: std::collections::VecDeque<Row>,
}

impl Rows {
    /// Create an empty result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a materialized row set.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    /// Advance the cursor, returning the next row until exhausted.
    pub fn read_next(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    /// Number of rows remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cursor is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.read_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new()
            .column("id", 1i64)
            .column("name", "A1")
            .column("location", Value::Null)
    }

    #[test]
    fn test_ordinal_lookup() {
        let row = sample_row();
        assert_eq!(row.ordinal("id"), Some(0));
        assert_eq!(row.ordinal("location"), Some(2));
        assert_eq!(row.ordinal("missing"), None);
    }

    #[test]
    fn test_null_inspection() {
        let row = sample_row();
        assert!(!row.is_null(0));
        assert!(row.is_null(2));
        // out of range behaves as NULL
        assert!(row.is_null(9));
    }

    #[test]
    fn test_typed_getters() {
        let row = sample_row();
        assert_eq!(row.get_int("id"), Some(1));
        assert_eq!(row.get_text("name"), Some("A1"));
        // present but NULL reads as absent
        assert_eq!(row.get_text("location"), None);
        // wrong type reads as absent
        assert_eq!(row.get_int("name"), None);
    }

    #[test]
    fn test_rows_cursor_order() {
        let mut rows = Rows::from_rows(vec![
            Row::new().column("id", 1i64),
            Row::new().column("id", 2i64),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.read_next().and_then(|r| r.get_int("id")), Some(1));
        assert_eq!(rows.read_next().and_then(|r| r.get_int("id")), Some(2));
        assert!(rows.read_next().is_none());
        assert!(rows.is_empty());
    }
}

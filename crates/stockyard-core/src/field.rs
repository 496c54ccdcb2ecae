//! Column descriptors and typed field bindings.
//!
//! An entity declares its schema once as static [`ColumnDef`]s; every
//! instance binds values against those descriptors through [`Field`]s. The
//! descriptor carries the flags that drive statement composition, the field
//! carries the current content. Fields hold no back-reference to their
//! entity or database: the codec is passed in wherever formatting happens.

use chrono::NaiveDateTime;

use crate::codec::ValueCodec;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::{SqlType, Value};

/// Static metadata for one table column.
///
/// `primary_key` and `insert` are orthogonal: a client-supplied primary key
/// participates in INSERT, a server-generated one does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Database column name.
    pub name: &'static str,
    /// SQL type of the column.
    pub sql_type: SqlType,
    /// Whether this column is part of the primary key.
    pub primary_key: bool,
    /// Whether this column participates in INSERT statements.
    pub insert: bool,
}

impl ColumnDef {
    /// Create a column descriptor with default flags (not a key, inserted).
    #[must_use]
    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            primary_key: false,
            insert: true,
        }
    }

    /// Set the primary-key flag.
    #[must_use]
    pub const fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = value;
        self
    }

    /// Set the insert-participation flag.
    #[must_use]
    pub const fn insert(mut self, value: bool) -> Self {
        self.insert = value;
        self
    }
}

/// Conversion contract between a Rust field type and [`Value`].
pub trait FieldValue: Clone {
    /// The SQL type this Rust type maps to.
    const SQL_TYPE: SqlType;

    /// Convert the content into a dynamic value.
    fn into_value(self) -> Value;

    /// Convert a dynamic value back, `None` for SQL NULL. A value of the
    /// wrong type is a parse failure, not a silent coercion.
    fn from_value(value: Value) -> Result<Option<Self>>;
}

impl FieldValue for i64 {
    const SQL_TYPE: SqlType = SqlType::Integer;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Int(i) => Ok(Some(i)),
            other => Err(type_mismatch(SqlType::Integer, &other)),
        }
    }
}

impl FieldValue for String {
    const SQL_TYPE: SqlType = SqlType::Text;

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s)),
            other => Err(type_mismatch(SqlType::Text, &other)),
        }
    }
}

impl FieldValue for NaiveDateTime {
    const SQL_TYPE: SqlType = SqlType::Timestamp;

    fn into_value(self) -> Value {
        Value::Timestamp(self)
    }

    fn from_value(value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Timestamp(ts) => Ok(Some(ts)),
            other => Err(type_mismatch(SqlType::Timestamp, &other)),
        }
    }
}

fn type_mismatch(expected: SqlType, got: &Value) -> Error {
    let got = got.sql_type().map_or("NULL", |t| t.sql_name());
    Error::Parse(format!(
        "expected {} value, got {}",
        expected.sql_name(),
        got
    ))
}

/// Which pieces of a field fragment to emit from [`Field::write`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteParts {
    /// Emit the formatted value.
    pub value: bool,
    /// Emit the column name.
    pub name: bool,
    /// Prefix the column name with the table alias.
    pub alias: bool,
}

/// A typed column binding: a static descriptor plus current content.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T: FieldValue> {
    def: &'static ColumnDef,
    content: Option<T>,
}

/// Integer column binding.
pub type IntegerField = Field<i64>;
/// Text column binding.
pub type TextField = Field<String>;
/// Timestamp column binding.
pub type TimestampField = Field<NaiveDateTime>;

impl<T: FieldValue> Field<T> {
    /// Bind a descriptor with no content.
    #[must_use]
    pub fn new(def: &'static ColumnDef) -> Self {
        debug_assert!(def.sql_type == T::SQL_TYPE, "descriptor/field type mismatch");
        Self { def, content: None }
    }

    /// The column descriptor this field is bound to.
    #[must_use]
    pub fn def(&self) -> &'static ColumnDef {
        self.def
    }

    /// Current content, `None` when absent.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.content.as_ref()
    }

    /// Set the content.
    pub fn set(&mut self, content: T) {
        self.content = Some(content);
    }

    /// Clear the content to absent.
    pub fn clear(&mut self) {
        self.content = None;
    }
}

/// Object-safe view over every `Field<T>` of an entity.
///
/// Entities expose their fields through this trait so statement composition
/// and row parsing can iterate heterogeneous columns in declaration order.
pub trait AnyField {
    /// The column descriptor.
    fn def(&self) -> &'static ColumnDef;

    /// Current content as a dynamic value, [`Value::Null`] when absent.
    fn value(&self) -> Value;

    /// Replace the content from a dynamic value. NULL clears the content;
    /// a value of the wrong type is a parse failure.
    fn set_value(&mut self, value: Value) -> Result<()>;

    /// Clear the content to absent.
    fn clear(&mut self);

    /// Format the current content as a SQL literal via the codec.
    fn format_value(&self, codec: &dyn ValueCodec) -> String;

    /// Load the content from a result row via the codec.
    fn read(&mut self, codec: &dyn ValueCodec, row: &Row) -> Result<()>;

    /// Compose a statement fragment from the requested parts.
    ///
    /// `name` and `value` yield `alias.col = literal` (alias only when
    /// requested); `name` alone yields the possibly aliased column name;
    /// `value` alone yields just the literal. When neither name nor value is
    /// requested the fragment is `None` and callers treat it as a no-op.
    fn write(&self, codec: &dyn ValueCodec, table_alias: &str, parts: WriteParts)
    -> Option<String>;
}

impl<T: FieldValue> AnyField for Field<T> {
    fn def(&self) -> &'static ColumnDef {
        self.def
    }

    fn value(&self) -> Value {
        self.content
            .clone()
            .map_or(Value::Null, FieldValue::into_value)
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        self.content = T::from_value(value)?;
        Ok(())
    }

    fn clear(&mut self) {
        self.content = None;
    }

    fn format_value(&self, codec: &dyn ValueCodec) -> String {
        codec.format(&self.value())
    }

    fn read(&mut self, codec: &dyn ValueCodec, row: &Row) -> Result<()> {
        let value = codec.read(row, self.def.name)?;
        self.set_value(value)
    }

    fn write(
        &self,
        codec: &dyn ValueCodec,
        table_alias: &str,
        parts: WriteParts,
    ) -> Option<String> {
        let name = if parts.alias {
            format!("{}.{}", table_alias, self.def.name)
        } else {
            self.def.name.to_string()
        };

        match (parts.name, parts.value) {
            (true, true) => Some(format!("{} = {}", name, self.format_value(codec))),
            (true, false) => Some(name),
            (false, true) => Some(self.format_value(codec)),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::AnsiCodec;

    static ID: ColumnDef = ColumnDef::new("id", SqlType::Integer)
        .primary_key(true)
        .insert(false);
    static NAME: ColumnDef = ColumnDef::new("name", SqlType::Text);

    #[test]
    fn test_column_def_flags_are_orthogonal() {
        // server-generated key: primary but not inserted
        assert!(ID.primary_key);
        assert!(!ID.insert);

        // client-supplied key: primary and inserted
        let supplied = ColumnDef::new("code", SqlType::Integer).primary_key(true);
        assert!(supplied.primary_key);
        assert!(supplied.insert);
    }

    #[test]
    fn test_absent_content_formats_to_null() {
        let field = IntegerField::new(&ID);
        assert_eq!(field.format_value(&AnsiCodec), "NULL");
    }

    #[test]
    fn test_present_content_formats_literal() {
        let mut id = IntegerField::new(&ID);
        id.set(42);
        assert_eq!(id.format_value(&AnsiCodec), "42");

        let mut name = TextField::new(&NAME);
        name.set("O'Brien".into());
        assert_eq!(name.format_value(&AnsiCodec), "'O''Brien'");
    }

    #[test]
    fn test_set_value_type_mismatch() {
        let mut id = IntegerField::new(&ID);
        assert!(matches!(
            id.set_value(Value::Text("7".into())),
            Err(Error::Parse(_))
        ));
        // content unchanged on failure path
        assert!(id.get().is_none());
    }

    #[test]
    fn test_read_null_clears_content() {
        let mut name = TextField::new(&NAME);
        name.set("stale".into());

        let row = Row::new().column("id", 1i64).column("name", Value::Null);
        name.read(&AnsiCodec, &row).unwrap();
        assert!(name.get().is_none());
    }

    #[test]
    fn test_read_missing_column_is_error() {
        let mut name = TextField::new(&NAME);
        let row = Row::new().column("id", 1i64);
        assert!(matches!(
            name.read(&AnsiCodec, &row),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_write_fragments() {
        let mut name = TextField::new(&NAME);
        name.set("A1".into());

        let both = WriteParts {
            value: true,
            name: true,
            alias: false,
        };
        assert_eq!(
            name.write(&AnsiCodec, "b", both).as_deref(),
            Some("name = 'A1'")
        );

        let aliased = WriteParts {
            value: true,
            name: true,
            alias: true,
        };
        assert_eq!(
            name.write(&AnsiCodec, "b", aliased).as_deref(),
            Some("b.name = 'A1'")
        );

        let name_only = WriteParts {
            name: true,
            alias: true,
            ..WriteParts::default()
        };
        assert_eq!(name.write(&AnsiCodec, "b", name_only).as_deref(), Some("b.name"));

        let value_only = WriteParts {
            value: true,
            ..WriteParts::default()
        };
        assert_eq!(name.write(&AnsiCodec, "b", value_only).as_deref(), Some("'A1'"));

        // neither part requested: a no-op, not an error
        assert!(name.write(&AnsiCodec, "b", WriteParts::default()).is_none());
    }
}

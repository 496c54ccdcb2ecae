//! Table-backed entities and their statement composition.

use crate::codec::ValueCodec;
use crate::error::{Error, Result};
use crate::field::{AnyField, WriteParts};
use crate::row::Row;

/// Static metadata for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    /// Table name in the database.
    pub name: &'static str,
    /// Short alias used when composing qualified column names.
    pub alias: &'static str,
}

impl TableDef {
    /// Create a table descriptor.
    #[must_use]
    pub const fn new(name: &'static str, alias: &'static str) -> Self {
        Self { name, alias }
    }
}

/// A table-backed record.
///
/// Implementors declare a static [`TableDef`] and a set of typed fields
/// bound to static [`ColumnDef`](crate::ColumnDef)s, exposed in declaration
/// order through [`fields`](Entity::fields). Everything else — column lists,
/// row materialization, and INSERT/UPDATE/DELETE composition — is provided.
///
/// `Default` constructs the blank instance the row-parsing loop populates.
pub trait Entity: Default {
    /// The table this entity maps to.
    fn table(&self) -> TableDef;

    /// All fields, in declaration order.
    fn fields(&self) -> Vec<&dyn AnyField>;

    /// All fields mutably, in declaration order.
    fn fields_mut(&mut self) -> Vec<&mut dyn AnyField>;

    /// Look up a field by column name.
    fn field(&self, column: &str) -> Option<&dyn AnyField> {
        self.fields().into_iter().find(|f| f.def().name == column)
    }

    /// Look up a field mutably by column name.
    fn field_mut(&mut self, column: &str) -> Option<&mut dyn AnyField> {
        self.fields_mut()
            .into_iter()
            .find(|f| f.def().name == column)
    }

    /// Comma-separated column list in declaration order.
    fn column_list(&self) -> String {
        self.fields()
            .iter()
            .map(|f| f.def().name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Populate every field from a result row.
    ///
    /// Any missing column or type mismatch fails the whole materialization;
    /// a partially populated entity is never returned to callers.
    fn read_row(&mut self, codec: &dyn ValueCodec, row: &Row) -> Result<()> {
        for field in self.fields_mut() {
            field.read(codec, row)?;
        }
        Ok(())
    }

    /// Compose the INSERT statement for this entity's current content.
    ///
    /// Covers insert-eligible fields in declaration order; absent content
    /// renders as the NULL literal.
    fn insert_sql(&self, codec: &dyn ValueCodec) -> Result<String> {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        for field in self.fields() {
            if !field.def().insert {
                continue;
            }
            columns.push(field.def().name.to_string());
            values.push(field.format_value(codec));
        }
        if columns.is_empty() {
            return Err(Error::Execution(format!(
                "no insertable columns on `{}`",
                self.table().name
            )));
        }
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table().name,
            columns.join(", "),
            values.join(", ")
        ))
    }

    /// Compose the UPDATE statement for this entity's current content.
    ///
    /// Non-key insert-eligible fields form the SET clause; every primary-key
    /// field forms the WHERE clause, ANDed in declaration order. An entity
    /// with no primary-key field refuses with [`Error::Unguarded`] rather
    /// than emitting an unfiltered statement.
    fn update_sql(&self, codec: &dyn ValueCodec) -> Result<String> {
        let where_clause = self.key_predicate(codec, "UPDATE")?;

        let assignments: Vec<String> = self
            .fields()
            .iter()
            .filter(|f| !f.def().primary_key && f.def().insert)
            .filter_map(|f| {
                f.write(
                    codec,
                    self.table().alias,
                    WriteParts {
                        value: true,
                        name: true,
                        alias: false,
                    },
                )
            })
            .collect();
        if assignments.is_empty() {
            return Err(Error::Execution(format!(
                "no updatable columns on `{}`",
                self.table().name
            )));
        }

        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            self.table().name,
            assignments.join(", "),
            where_clause
        ))
    }

    /// Compose the DELETE statement keyed on this entity's primary key.
    ///
    /// Same unguarded-mutation refusal as [`update_sql`](Entity::update_sql).
    fn delete_sql(&self, codec: &dyn ValueCodec) -> Result<String> {
        let where_clause = self.key_predicate(codec, "DELETE")?;
        Ok(format!(
            "DELETE FROM {} WHERE {}",
            self.table().name,
            where_clause
        ))
    }

    /// AND-joined equality predicate over every primary-key field, in
    /// declaration order.
    fn key_predicate(&self, codec: &dyn ValueCodec, statement: &'static str) -> Result<String> {
        let predicates: Vec<String> = self
            .fields()
            .iter()
            .filter(|f| f.def().primary_key)
            .filter_map(|f| {
                f.write(
                    codec,
                    self.table().alias,
                    WriteParts {
                        value: true,
                        name: true,
                        alias: false,
                    },
                )
            })
            .collect();

        if predicates.is_empty() {
            return Err(Error::Unguarded {
                table: self.table().name,
                statement,
            });
        }
        Ok(predicates.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::AnsiCodec;
    use crate::field::{ColumnDef, IntegerField, TextField};
    use crate::value::{SqlType, Value};

    static CRATE_TABLE: TableDef = TableDef::new("crate", "c");
    static CRATE_ID: ColumnDef = ColumnDef::new("id", SqlType::Integer).primary_key(true);
    static CRATE_LABEL: ColumnDef = ColumnDef::new("label", SqlType::Text);
    static CRATE_ROW: ColumnDef = ColumnDef::new("row_code", SqlType::Text);

    struct Crate {
        id: IntegerField,
        label: TextField,
        row_code: TextField,
    }

    impl Default for Crate {
        fn default() -> Self {
            Self {
                id: IntegerField::new(&CRATE_ID),
                label: TextField::new(&CRATE_LABEL),
                row_code: TextField::new(&CRATE_ROW),
            }
        }
    }

    impl Entity for Crate {
        fn table(&self) -> TableDef {
            CRATE_TABLE
        }

        fn fields(&self) -> Vec<&dyn AnyField> {
            vec![&self.id, &self.label, &self.row_code]
        }

        fn fields_mut(&mut self) -> Vec<&mut dyn AnyField> {
            vec![&mut self.id, &mut self.label, &mut self.row_code]
        }
    }

    /// Same shape but with no primary key declared.
    struct Keyless {
        label: TextField,
    }

    impl Default for Keyless {
        fn default() -> Self {
            Self {
                label: TextField::new(&CRATE_LABEL),
            }
        }
    }

    impl Entity for Keyless {
        fn table(&self) -> TableDef {
            TableDef::new("keyless", "k")
        }

        fn fields(&self) -> Vec<&dyn AnyField> {
            vec![&self.label]
        }

        fn fields_mut(&mut self) -> Vec<&mut dyn AnyField> {
            vec![&mut self.label]
        }
    }

    fn sample() -> Crate {
        let mut c = Crate::default();
        c.id.set(3);
        c.label.set("bolts".into());
        c.row_code.set("R-02".into());
        c
    }

    #[test]
    fn test_column_list_declaration_order() {
        assert_eq!(Crate::default().column_list(), "id, label, row_code");
    }

    #[test]
    fn test_insert_sql() {
        assert_eq!(
            sample().insert_sql(&AnsiCodec).unwrap(),
            "INSERT INTO crate (id, label, row_code) VALUES (3, 'bolts', 'R-02')"
        );
    }

    #[test]
    fn test_insert_sql_absent_content_is_null() {
        let mut c = Crate::default();
        c.id.set(3);
        assert_eq!(
            c.insert_sql(&AnsiCodec).unwrap(),
            "INSERT INTO crate (id, label, row_code) VALUES (3, NULL, NULL)"
        );
    }

    #[test]
    fn test_update_sql_keys_in_where() {
        assert_eq!(
            sample().update_sql(&AnsiCodec).unwrap(),
            "UPDATE crate SET label = 'bolts', row_code = 'R-02' WHERE id = 3"
        );
    }

    #[test]
    fn test_delete_sql() {
        assert_eq!(
            sample().delete_sql(&AnsiCodec).unwrap(),
            "DELETE FROM crate WHERE id = 3"
        );
    }

    #[test]
    fn test_unguarded_mutations_refused() {
        let mut k = Keyless::default();
        k.label.set("bolts".into());

        assert!(matches!(
            k.update_sql(&AnsiCodec),
            Err(Error::Unguarded {
                table: "keyless",
                statement: "UPDATE"
            })
        ));
        assert!(matches!(
            k.delete_sql(&AnsiCodec),
            Err(Error::Unguarded {
                table: "keyless",
                statement: "DELETE"
            })
        ));
    }

    #[test]
    fn test_read_row_populates_every_field() {
        let row = Row::new()
            .column("id", 7i64)
            .column("label", "nails")
            .column("row_code", Value::Null);

        let mut c = Crate::default();
        c.read_row(&AnsiCodec, &row).unwrap();
        assert_eq!(c.id.get(), Some(&7));
        assert_eq!(c.label.get().map(String::as_str), Some("nails"));
        assert!(c.row_code.get().is_none());
    }

    #[test]
    fn test_read_row_missing_column_fails() {
        let row = Row::new().column("id", 7i64);
        let mut c = Crate::default();
        assert!(matches!(
            c.read_row(&AnsiCodec, &row),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_field_lookup_by_column() {
        let c = sample();
        assert_eq!(c.field("label").map(|f| f.value()), Some(Value::Text("bolts".into())));
        assert!(c.field("nope").is_none());
    }
}

//! Typed relations between entities: foreign keys and one-to-many views.

use std::marker::PhantomData;

use crate::codec::ValueCodec;
use crate::connection::Connector;
use crate::database::Database;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::value::Value;

/// Ordered mapping from foreign column names to local column names.
///
/// Shared by [`ForeignKey`] and [`RelatedList`]: both express "rows of the
/// foreign table whose `key` column equals this entity's `local` column".
/// Registration order is preserved and drives predicate order.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    entries: Vec<(String, String)>,
}

impl KeyMap {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping entry.
    ///
    /// A key may be registered once; a duplicate fails with
    /// [`Error::DuplicateKey`] and leaves the first mapping unchanged.
    pub fn add_field(&mut self, key: impl Into<String>, local: impl Into<String>) -> Result<()> {
        let key = key.into();
        if self.entries.iter().any(|(k, _)| *k == key) {
            return Err(Error::DuplicateKey(key));
        }
        self.entries.push((key, local.into()));
        Ok(())
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered `(key, local)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, l)| (k.as_str(), l.as_str()))
    }

    /// AND-joined equality predicate matching each foreign `key` column
    /// against the formatted value of the corresponding local field.
    pub fn where_clause<L: Entity>(&self, local: &L, codec: &dyn ValueCodec) -> Result<String> {
        let mut clause = String::new();
        for (key, local_column) in self.iter() {
            let field = local.field(local_column).ok_or_else(|| {
                Error::Parse(format!(
                    "local column `{}` not declared on `{}`",
                    local_column,
                    local.table().name
                ))
            })?;
            if !clause.is_empty() {
                clause.push_str(" AND ");
            }
            clause.push_str(&format!("{} = {}", key, field.format_value(codec)));
        }
        Ok(clause)
    }
}

/// Apply column/value assignments to an entity's fields.
///
/// Companion to [`ForeignKey::propagation`]: the assignment list is computed
/// first, then applied, so the key and the entity that owns it never need to
/// be borrowed at the same time.
pub fn apply_values<E: Entity>(entity: &mut E, assignments: Vec<(String, Value)>) -> Result<()> {
    for (column, value) in assignments {
        let field = entity.field_mut(&column).ok_or_else(|| {
            Error::Parse(format!("local column `{column}` not declared on entity"))
        })?;
        field.set_value(value)?;
    }
    Ok(())
}

/// A typed reference from the owning entity to one row of table `F`.
///
/// The mapping pairs columns of the foreign table with local fields holding
/// the reference values. Resolution is strict: exactly one matching row.
#[derive(Debug, Clone, Default)]
pub struct ForeignKey<F: Entity> {
    map: KeyMap,
    _foreign: PhantomData<fn() -> F>,
}

impl<F: Entity> ForeignKey<F> {
    /// Create an empty foreign key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: KeyMap::new(),
            _foreign: PhantomData,
        }
    }

    /// Register a mapping from a foreign column to a local column.
    pub fn add_field(&mut self, key: impl Into<String>, local: impl Into<String>) -> Result<()> {
        self.map.add_field(key, local)
    }

    /// The underlying mapping.
    #[must_use]
    pub fn map(&self) -> &KeyMap {
        &self.map
    }

    /// Fetch the referenced foreign entity.
    ///
    /// Fails with [`Error::NotFound`] when no row matches and
    /// [`Error::Ambiguous`] when more than one does; this is a strict lookup,
    /// never a "first match" policy.
    pub fn resolve<L: Entity, C: Connector>(&self, local: &L, db: &Database<C>) -> Result<F> {
        let filter = self.map.where_clause(local, db.codec())?;
        db.get_entity::<F>(&filter, None)
    }

    /// Column/value assignments that copy the foreign entity's key fields
    /// onto the local fields, matched by key name.
    ///
    /// When `from` is absent every registered local field is cleared
    /// instead. The result is applied with [`apply_values`].
    #[must_use]
    pub fn propagation(&self, from: Option<&F>) -> Vec<(String, Value)> {
        self.map
            .iter()
            .map(|(key, local_column)| {
                let value = from
                    .and_then(|f| f.field(key))
                    .map_or(Value::Null, |f| f.value());
                (local_column.to_string(), value)
            })
            .collect()
    }
}

/// A typed one-to-many view: all rows of table `F` referencing the owning
/// entity through the mapped columns.
#[derive(Debug, Clone, Default)]
pub struct RelatedList<F: Entity> {
    map: KeyMap,
    _foreign: PhantomData<fn() -> F>,
}

impl<F: Entity> RelatedList<F> {
    /// Create an empty related list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: KeyMap::new(),
            _foreign: PhantomData,
        }
    }

    /// Register a mapping from a foreign column to a local column.
    pub fn add_field(&mut self, key: impl Into<String>, local: impl Into<String>) -> Result<()> {
        self.map.add_field(key, local)
    }

    /// The underlying mapping.
    #[must_use]
    pub fn map(&self) -> &KeyMap {
        &self.map
    }

    /// Count the referencing foreign rows.
    ///
    /// A query failure is an error, never a zero count.
    pub fn count<L: Entity, C: Connector>(&self, local: &L, db: &Database<C>) -> Result<u64> {
        let filter = self.map.where_clause(local, db.codec())?;
        db.count_entities::<F>(&filter)
    }

    /// Fetch all referencing foreign rows, in database return order.
    pub fn get<L: Entity, C: Connector>(&self, local: &L, db: &Database<C>) -> Result<Vec<F>> {
        let filter = self.map.where_clause(local, db.codec())?;
        db.get_entities::<F>(&filter, None)
    }
}

//! Storage bays.

use stockyard_core::{
    AnyField, ColumnDef, Entity, IntegerField, RelatedList, SqlType, TableDef, TextField,
};

use super::Unit;

static TABLE: TableDef = TableDef::new("bay", "b");

static ID: ColumnDef = ColumnDef::new("id", SqlType::Integer).primary_key(true);
static NAME: ColumnDef = ColumnDef::new("name", SqlType::Text);
static LOCATION: ColumnDef = ColumnDef::new("location", SqlType::Text);

/// A storage bay. Bay ids are assigned by the warehouse plan, so the
/// primary key is client-supplied and participates in INSERT.
#[derive(Debug, Clone)]
pub struct Bay {
    /// Bay id, client-supplied.
    pub id: IntegerField,
    /// Display name, e.g. `A1`.
    pub name: TextField,
    /// Physical location label.
    pub location: TextField,
    /// Units stored in this bay (`unit.bay_id` = `bay.id`).
    pub units: RelatedList<Unit>,
}

impl Default for Bay {
    fn default() -> Self {
        let mut units = RelatedList::new();
        units
            .add_field("bay_id", "id")
            .expect("bay relation keys are distinct");
        Self {
            id: IntegerField::new(&ID),
            name: TextField::new(&NAME),
            location: TextField::new(&LOCATION),
            units,
        }
    }
}

impl Entity for Bay {
    fn table(&self) -> TableDef {
        TABLE
    }

    fn fields(&self) -> Vec<&dyn AnyField> {
        vec![&self.id, &self.name, &self.location]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn AnyField> {
        vec![&mut self.id, &mut self.name, &mut self.location]
    }
}

//! Stored units.

use stockyard_core::{
    AnyField, ColumnDef, Entity, ForeignKey, IntegerField, Result, SqlType, TableDef, TextField,
    apply_values,
};

use super::Bay;

static TABLE: TableDef = TableDef::new("unit", "u");

static ID: ColumnDef = ColumnDef::new("id", SqlType::Integer)
    .primary_key(true)
    .insert(false);
static NAME: ColumnDef = ColumnDef::new("name", SqlType::Text);
static BAY_ID: ColumnDef = ColumnDef::new("bay_id", SqlType::Integer);

/// A unit stored in a bay. Unit ids are server-generated, so the primary
/// key does not participate in INSERT.
#[derive(Debug, Clone)]
pub struct Unit {
    /// Unit id, server-generated.
    pub id: IntegerField,
    /// Display name, e.g. `U1`.
    pub name: TextField,
    /// Id of the bay holding this unit.
    pub bay_id: IntegerField,
    /// Reference to the holding bay (`bay.id` = `unit.bay_id`).
    pub bay: ForeignKey<Bay>,
}

impl Default for Unit {
    fn default() -> Self {
        let mut bay = ForeignKey::new();
        bay.add_field("id", "bay_id")
            .expect("unit relation keys are distinct");
        Self {
            id: IntegerField::new(&ID),
            name: TextField::new(&NAME),
            bay_id: IntegerField::new(&BAY_ID),
            bay,
        }
    }
}

impl Unit {
    /// Copy the bay's key onto this unit, or clear it when `bay` is absent.
    pub fn set_bay(&mut self, bay: Option<&Bay>) -> Result<()> {
        let assignments = self.bay.propagation(bay);
        apply_values(self, assignments)
    }
}

impl Entity for Unit {
    fn table(&self) -> TableDef {
        TABLE
    }

    fn fields(&self) -> Vec<&dyn AnyField> {
        vec![&self.id, &self.name, &self.bay_id]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn AnyField> {
        vec![&mut self.id, &mut self.name, &mut self.bay_id]
    }
}

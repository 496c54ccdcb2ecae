//! Core types and traits for Stockyard.
//!
//! `stockyard-core` is the backend-neutral foundation of the data-access
//! layer. Everything that does not touch a concrete SQL dialect lives here.
//!
//! # Role In The Architecture
//!
//! - **Contract layer**: [`Entity`], [`Connection`] and [`Connector`] are the
//!   traits implemented by user tables and database backends.
//! - **Data model**: [`Row`], [`Rows`] and [`Value`] represent statement
//!   results shared between the core and the driver crates.
//! - **Service layer**: [`Database`] owns a [`ConnectionProfile`] and a
//!   backend [`Connector`] and mediates every statement execution.
//!
//! Backend crates (`stockyard-mysql`, `stockyard-mssql`) supply only three
//! things: connection-string construction, [`ValueCodec`] literal rules, and
//! the connection factory. All query composition and the row-to-entity
//! parsing loop are written once against the contracts in this crate.

pub mod codec;
pub mod connection;
pub mod database;
pub mod entity;
pub mod error;
pub mod field;
pub mod profile;
pub mod relation;
pub mod row;
pub mod value;

pub use codec::{AnsiCodec, ValueCodec, quote_text};
pub use connection::{Connection, Connector};
pub use database::Database;
pub use entity::{Entity, TableDef};
pub use error::{Error, Result};
pub use field::{
    AnyField, ColumnDef, Field, FieldValue, IntegerField, TextField, TimestampField, WriteParts,
};
pub use profile::{ConnectionProfile, DatabaseKind};
pub use relation::{ForeignKey, KeyMap, RelatedList, apply_values};
pub use row::{Row, Rows};
pub use value::{SqlType, Value};

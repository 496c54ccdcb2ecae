//! Stockyard: a minimal typed data-access layer over SQL backends.
//!
//! Applications declare table-backed entities with typed fields, foreign
//! keys, and one-to-many related lists; Stockyard translates them into SQL
//! executed through a per-backend connector. This facade re-exports the
//! core contracts alongside the MySQL and SQL Server dialects and ships the
//! warehouse example entities ([`entities::Bay`], [`entities::Unit`]).
//!
//! # Example
//!
//! ```ignore
//! let profile = ConnectionProfile::new("localhost", "warehouse", "SELECT 1")
//!     .user("wt")
//!     .password("...");
//! let db = Database::new(profile, MySqlConnector::new(open_driver));
//!
//! let mut bay = Bay::default();
//! bay.id.set(1);
//! bay.name.set("A1".into());
//! db.insert(&bay)?;
//!
//! let stored: Bay = db.get_entity("id = 1", None)?;
//! let units = stored.units.get(&stored, &db)?;
//! ```

pub mod entities;

pub use stockyard_core::{
    AnsiCodec, AnyField, ColumnDef, Connection, ConnectionProfile, Connector, Database,
    DatabaseKind, Entity, Error, Field, FieldValue, ForeignKey, IntegerField, KeyMap, RelatedList,
    Result, Row, Rows, SqlType, TableDef, TextField, TimestampField, Value, ValueCodec,
    WriteParts, apply_values, quote_text,
};
pub use stockyard_mssql::{SqlServerCodec, SqlServerConnector};
pub use stockyard_mysql::{MySqlCodec, MySqlConnector};

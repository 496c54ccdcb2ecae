//! Warehouse example entities.
//!
//! `Bay` and `Unit` demonstrate the declaration pattern: static table and
//! column descriptors, typed fields bound in `Default`, and relations
//! declared alongside the data fields.

mod bay;
mod unit;

pub use bay::Bay;
pub use unit::Unit;

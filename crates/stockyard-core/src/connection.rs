//! Backend connection contracts.
//!
//! The core never touches a concrete driver type. A backend crate supplies a
//! [`Connector`] — connection-string construction, codec rules, and the
//! connection factory — and whatever satisfies the [`Connection`] contract
//! is opaque to everything above it, including network, TLS, and
//! authentication behavior.

use crate::codec::ValueCodec;
use crate::error::Result;
use crate::profile::ConnectionProfile;
use crate::row::Rows;
use crate::value::Value;

/// One open backend connection.
///
/// A connection is exclusively owned by the single [`Database`]
/// (crate::Database) call that opened it and is released by drop on every
/// exit path. Each call executes exactly one statement.
pub trait Connection {
    /// Execute a statement without a result set, returning the affected row
    /// count. Drivers report failed executions as [`Error::Execution`]
    /// (crate::Error::Execution).
    fn execute(&mut self, sql: &str) -> Result<u64>;

    /// Execute a statement and return its single scalar value.
    fn query_scalar(&mut self, sql: &str) -> Result<Value>;

    /// Execute a statement and return its result rows.
    fn query(&mut self, sql: &str) -> Result<Rows>;
}

/// Per-backend factory: everything a SQL dialect contributes.
pub trait Connector {
    /// The connection type this backend produces.
    type Conn: Connection;

    /// Open a fresh connection for one statement.
    fn open(&self, profile: &ConnectionProfile) -> Result<Self::Conn>;

    /// The literal formatting rules of this dialect.
    fn codec(&self) -> &dyn ValueCodec;
}

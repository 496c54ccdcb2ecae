//! MySQL dialect for Stockyard.
//!
//! Supplies the three things a backend contributes: connection-string
//! construction in MySQL format, [`MySqlCodec`] literal rules, and the
//! connection factory. The wire driver itself stays external: the connector
//! is generic over any function producing a
//! [`Connection`](stockyard_core::Connection) from a connection string, so
//! network, TLS, and authentication behavior never leak into the core.

use tracing::debug;

use stockyard_core::{
    AnsiCodec, Connection, ConnectionProfile, Connector, Result, Value, ValueCodec,
};

/// MySQL literal formatting rules.
///
/// Text is single-quoted with embedded quotes doubled, integers are unquoted
/// decimal, timestamps render `'YYYY-MM-DD HH:MM:SS'`, and absent content is
/// the `NULL` literal. These match the ANSI defaults; the codec exists as
/// the dialect's own extension point.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlCodec;

impl ValueCodec for MySqlCodec {
    fn format(&self, value: &Value) -> String {
        AnsiCodec.format(value)
    }
}

/// MySQL backend connector.
///
/// `open` is the opaque driver hook: it receives the profile's MySQL
/// connection string and returns an open connection.
#[derive(Debug, Clone)]
pub struct MySqlConnector<F> {
    open: F,
}

impl<F, Conn> MySqlConnector<F>
where
    F: Fn(&str) -> Result<Conn>,
    Conn: Connection,
{
    /// Wrap a driver entry point.
    pub fn new(open: F) -> Self {
        Self { open }
    }
}

impl<F, Conn> Connector for MySqlConnector<F>
where
    F: Fn(&str) -> Result<Conn>,
    Conn: Connection,
{
    type Conn = Conn;

    fn open(&self, profile: &ConnectionProfile) -> Result<Conn> {
        debug!(server = %profile.server, database = %profile.database, "opening mysql connection");
        (self.open)(&profile.to_mysql_connection_string())
    }

    fn codec(&self) -> &dyn ValueCodec {
        &MySqlCodec
    }
}

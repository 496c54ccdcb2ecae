//! SQL Server dialect for Stockyard.
//!
//! Mirrors the MySQL backend's shape: connection-string construction
//! (credential-mode-dependent), [`SqlServerCodec`] literal rules, and the
//! connection factory over an opaque driver entry point.

use tracing::debug;

use stockyard_core::{
    AnsiCodec, Connection, ConnectionProfile, Connector, Result, Value, ValueCodec,
};

/// SQL Server literal formatting rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerCodec;

impl ValueCodec for SqlServerCodec {
    fn format(&self, value: &Value) -> String {
        AnsiCodec.format(value)
    }
}

/// SQL Server backend connector.
///
/// Uses the trusted-connection string when the profile enables integrated
/// credentials, the user/password form otherwise.
#[derive(Debug, Clone)]
pub struct SqlServerConnector<F> {
    open: F,
}

impl<F, Conn> SqlServerConnector<F>
where
    F: Fn(&str) -> Result<Conn>,
    Conn: Connection,
{
    /// Wrap a driver entry point.
    pub fn new(open: F) -> Self {
        Self { open }
    }
}

impl<F, Conn> Connector for SqlServerConnector<F>
where
    F: Fn(&str) -> Result<Conn>,
    Conn: Connection,
{
    type Conn = Conn;

    fn open(&self, profile: &ConnectionProfile) -> Result<Conn> {
        debug!(
            server = %profile.server,
            database = %profile.database,
            trusted = profile.trusted_connection,
            "opening sql server connection"
        );
        (self.open)(&profile.to_sqlserver_connection_string())
    }

    fn codec(&self) -> &dyn ValueCodec {
        &SqlServerCodec
    }
}

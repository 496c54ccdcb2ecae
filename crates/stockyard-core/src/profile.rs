//! Connection profiles and dialect-specific connection strings.

use serde::{Deserialize, Serialize};

/// The SQL engine a profile targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatabaseKind {
    /// MySQL / MariaDB.
    #[default]
    MySql,
    /// Microsoft SQL Server.
    SqlServer,
}

/// Connection parameters for one database.
///
/// A profile is owned by exactly one [`Database`](crate::Database) and is
/// read-only after setup; the setters below are meant for startup
/// configuration. The password is write-only: it never appears in `Debug`
/// output or serialized form, only inside the produced connection strings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// IP address or server name.
    pub server: String,
    /// Database name.
    pub database: String,
    /// Target engine.
    pub kind: DatabaseKind,
    /// Database user name.
    pub user: String,
    #[serde(skip_serializing, default)]
    password: String,
    /// Connection timeout in seconds.
    pub timeout: u32,
    /// Use integrated (trusted) credentials instead of user/password.
    pub trusted_connection: bool,
    /// Probe statement used by connectivity checks.
    pub probe_query: String,
}

impl ConnectionProfile {
    /// Create a profile with empty credentials, a 30 second timeout, and
    /// integrated credentials off.
    #[must_use]
    pub fn new(
        server: impl Into<String>,
        database: impl Into<String>,
        probe_query: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            database: database.into(),
            kind: DatabaseKind::default(),
            user: String::new(),
            password: String::new(),
            timeout: 30,
            trusted_connection: false,
            probe_query: probe_query.into(),
        }
    }

    /// Set the target engine.
    #[must_use]
    pub fn kind(mut self, kind: DatabaseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the user name.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the connection timeout in seconds.
    #[must_use]
    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = seconds;
        self
    }

    /// Use integrated (trusted) credentials.
    #[must_use]
    pub fn trusted_connection(mut self, trusted: bool) -> Self {
        self.trusted_connection = trusted;
        self
    }

    /// Connection string in MySQL format.
    #[must_use]
    pub fn to_mysql_connection_string(&self) -> String {
        format!(
            "Server={};Database={};Uid={};Pwd={};",
            self.server, self.database, self.user, self.password
        )
    }

    /// Connection string in SQL Server format.
    ///
    /// Uses `Trusted_Connection=True` when integrated credentials are
    /// enabled, user/password otherwise.
    #[must_use]
    pub fn to_sqlserver_connection_string(&self) -> String {
        if self.trusted_connection {
            return format!(
                "Server={};Database={};Trusted_Connection=True;Connection Timeout={};",
                self.server, self.database, self.timeout
            );
        }
        format!(
            "Server={};Database={};User Id={};Password={};Connection Timeout={};",
            self.server, self.database, self.user, self.password, self.timeout
        )
    }

    /// Connection string in ODBC format.
    #[must_use]
    pub fn to_odbc_connection_string(&self) -> String {
        format!(
            "Driver={{SQL Server}};Server={};Database={};Uid={};Pwd={};",
            self.server, self.database, self.user, self.password
        )
    }
}

impl std::fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("kind", &self.kind)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("trusted_connection", &self.trusted_connection)
            .field("probe_query", &self.probe_query)
            .finish()
    }
}

//! The database service: statement execution and entity materialization.

use tracing::{debug, error};

use crate::codec::ValueCodec;
use crate::connection::{Connection, Connector};
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::profile::ConnectionProfile;
use crate::row::Row;
use crate::value::Value;

/// The shared data-access service.
///
/// A `Database` owns a [`ConnectionProfile`] and a backend [`Connector`] and
/// mediates all SQL execution. Every operation opens a fresh connection,
/// executes exactly one statement, and releases the connection before
/// returning — there is no pooling, no reuse across calls, and no mutable
/// cross-call state. The profile is read-only after construction, so a
/// `Database` may be shared by reference for the lifetime of the entities
/// constructed against it.
///
/// Failures are logged at this boundary with the name of the failing
/// operation and then propagated as [`Error`] values. The only
/// log-and-continue path is the best-effort [`try_connection`]
/// (Database::try_connection) probe.
#[derive(Debug)]
pub struct Database<C: Connector> {
    profile: ConnectionProfile,
    connector: C,
}

impl<C: Connector> Database<C> {
    /// Create a database service from a profile and a backend connector.
    pub fn new(profile: ConnectionProfile, connector: C) -> Self {
        Self { profile, connector }
    }

    /// The connection profile this service was configured with.
    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    /// The literal formatting rules of the configured backend.
    pub fn codec(&self) -> &dyn ValueCodec {
        self.connector.codec()
    }

    /// Execute a statement without a result set, returning the affected row
    /// count.
    pub fn execute_non_query(&self, sql: &str) -> Result<u64> {
        self.run("execute_non_query", sql, |conn| conn.execute(sql))
    }

    /// Execute a statement and parse its single scalar result.
    ///
    /// Fails with [`Error::Parse`] when the parser yields no value.
    pub fn execute_scalar<T>(
        &self,
        sql: &str,
        parse: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<T> {
        self.run("execute_scalar", sql, |conn| {
            let value = conn.query_scalar(sql)?;
            parse(&value)
                .ok_or_else(|| Error::Parse(format!("scalar result unusable for `{sql}`")))
        })
    }

    /// Execute a statement and parse every result row.
    ///
    /// Strict all-or-nothing: any row the parser rejects fails the whole
    /// call and partial results are discarded.
    pub fn execute_reader<T>(
        &self,
        sql: &str,
        mut parse: impl FnMut(&dyn ValueCodec, &Row) -> Result<T>,
    ) -> Result<Vec<T>> {
        let codec = self.connector.codec();
        self.run("execute_reader", sql, |conn| {
            let rows = conn.query(sql)?;
            let mut items = Vec::new();
            for row in rows {
                items.push(parse(codec, &row)?);
            }
            Ok(items)
        })
    }

    /// Fetch all entities of type `E` matching a filter.
    ///
    /// Composes `SELECT <cols> FROM <table> [WHERE where] [ORDER BY
    /// order_by]` over `E`'s declared columns. An empty filter selects the
    /// whole table.
    pub fn get_entities<E: Entity>(&self, filter: &str, order_by: Option<&str>) -> Result<Vec<E>> {
        let template = E::default();
        let mut sql = format!(
            "SELECT {} FROM {}",
            template.column_list(),
            template.table().name
        );
        if !filter.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }
        if let Some(order_by) = order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        self.execute_reader(&sql, |codec, row| {
            let mut entity = E::default();
            entity.read_row(codec, row)?;
            Ok(entity)
        })
    }

    /// Count entities of type `E` matching a filter.
    pub fn count_entities<E: Entity>(&self, filter: &str) -> Result<u64> {
        let template = E::default();
        let mut sql = format!("SELECT COUNT(*) FROM {}", template.table().name);
        if !filter.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }

        self.execute_scalar(&sql, |value| {
            value.as_int().and_then(|count| u64::try_from(count).ok())
        })
    }

    /// Fetch exactly one entity of type `E` matching a filter.
    ///
    /// Fails with [`Error::NotFound`] on zero matches and
    /// [`Error::Ambiguous`] on more than one; it never silently picks the
    /// first.
    pub fn get_entity<E: Entity>(&self, filter: &str, order_by: Option<&str>) -> Result<E> {
        let mut matches = self.get_entities::<E>(filter, order_by)?;
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(self.report("get_entity", Error::NotFound(filter.to_string()))),
            count => Err(self.report(
                "get_entity",
                Error::Ambiguous {
                    filter: filter.to_string(),
                    count,
                },
            )),
        }
    }

    /// Insert an entity's current content.
    pub fn insert<E: Entity>(&self, entity: &E) -> Result<()> {
        let sql = entity.insert_sql(self.codec())?;
        self.execute_non_query(&sql).map(|_| ())
    }

    /// Update an entity's row, keyed on its primary-key fields.
    pub fn update<E: Entity>(&self, entity: &E) -> Result<()> {
        let sql = entity
            .update_sql(self.codec())
            .map_err(|err| self.report("update", err))?;
        self.execute_non_query(&sql).map(|_| ())
    }

    /// Delete an entity's row, keyed on its primary-key fields.
    pub fn delete<E: Entity>(&self, entity: &E) -> Result<()> {
        let sql = entity
            .delete_sql(self.codec())
            .map_err(|err| self.report("delete", err))?;
        self.execute_non_query(&sql).map(|_| ())
    }

    /// Probe connectivity with the profile's default query.
    ///
    /// Best-effort: failures are logged and reported as `false`, never
    /// propagated. This is the only operation with log-and-continue
    /// semantics.
    pub fn try_connection(&self) -> bool {
        self.execute_non_query(&self.profile.probe_query).is_ok()
    }

    /// Open a connection, run one statement-scoped operation, and release
    /// the connection on every exit path. Failures are logged here with the
    /// operation name before propagating.
    fn run<T>(
        &self,
        operation: &'static str,
        sql: &str,
        body: impl FnOnce(&mut C::Conn) -> Result<T>,
    ) -> Result<T> {
        debug!(operation, sql, "executing statement");
        let mut conn = self
            .connector
            .open(&self.profile)
            .map_err(|err| self.report(operation, err))?;
        // connection drops (closes) on both branches
        body(&mut conn).map_err(|err| self.report(operation, err))
    }

    /// Operator-visible diagnostic for any failure crossing this boundary.
    fn report(&self, operation: &'static str, err: Error) -> Error {
        error!(operation, error = %err, "database operation failed");
        err
    }
}

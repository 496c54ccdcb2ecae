//! Mock driver fixtures for integration tests.
//!
//! The scripted connection stands in for a real wire driver: it satisfies
//! the `Connection` contract, records every statement it receives, and
//! replays a prepared list of replies in order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;

use stockyard::{
    ConnectionProfile, Database, Error, MySqlConnector, Result, Row, Rows, Value,
};

/// One scripted driver reply.
pub enum Reply {
    /// Affected row count for a non-query.
    Affected(u64),
    /// Scalar result.
    Scalar(Value),
    /// Result rows.
    Rows(Vec<Row>),
    /// Driver-reported failure.
    Fail(String),
}

/// Statements received by the mock driver, in execution order.
pub type SqlLog = Rc<RefCell<Vec<String>>>;

pub struct ScriptedConn {
    script: Rc<RefCell<VecDeque<Reply>>>,
    log: SqlLog,
}

impl ScriptedConn {
    fn next(&mut self, sql: &str) -> Result<Reply> {
        self.log.borrow_mut().push(sql.to_string());
        match self.script.borrow_mut().pop_front() {
            Some(Reply::Fail(message)) => Err(Error::Execution(message)),
            Some(reply) => Ok(reply),
            None => Err(Error::Execution("mock script exhausted".into())),
        }
    }
}

impl stockyard::Connection for ScriptedConn {
    fn execute(&mut self, sql: &str) -> Result<u64> {
        match self.next(sql)? {
            Reply::Affected(n) => Ok(n),
            _ => Err(Error::Execution("mock: reply is not an affected count".into())),
        }
    }

    fn query_scalar(&mut self, sql: &str) -> Result<Value> {
        match self.next(sql)? {
            Reply::Scalar(value) => Ok(value),
            _ => Err(Error::Execution("mock: reply is not a scalar".into())),
        }
    }

    fn query(&mut self, sql: &str) -> Result<Rows> {
        match self.next(sql)? {
            Reply::Rows(rows) => Ok(Rows::from_rows(rows)),
            _ => Err(Error::Execution("mock: reply is not a row set".into())),
        }
    }
}

/// Build a database over the MySQL connector with a scripted driver behind
/// it, returning the statement log alongside.
pub fn scripted_db(
    replies: Vec<Reply>,
) -> (
    Database<MySqlConnector<impl Fn(&str) -> Result<ScriptedConn>>>,
    SqlLog,
) {
    init_tracing();

    let script = Rc::new(RefCell::new(VecDeque::from(replies)));
    let log: SqlLog = Rc::new(RefCell::new(Vec::new()));
    let conn_log = Rc::clone(&log);

    let connector = MySqlConnector::new(move |_conn_str: &str| {
        Ok(ScriptedConn {
            script: Rc::clone(&script),
            log: Rc::clone(&conn_log),
        })
    });

    let profile = ConnectionProfile::new("localhost", "warehouse", "SELECT 1")
        .user("wt")
        .password("test-only");
    (Database::new(profile, connector), log)
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

//! Error types for Stockyard.
//!
//! Driver-level failures (`Connection`, `Execution`, `Parse`) are produced at
//! the [`Database`](crate::Database) boundary, logged there, and propagated
//! to the caller. Structural failures (`NotFound`, `Ambiguous`,
//! `DuplicateKey`, `Unguarded`) are contract violations and always propagate
//! as distinct variants so callers can match on them.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend connection could not be opened or authenticated.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The driver rejected a statement or reported a failed execution.
    #[error("statement failed: {0}")]
    Execution(String),

    /// A result row or scalar could not be converted to the requested shape.
    #[error("parse failed: {0}")]
    Parse(String),

    /// A single-entity lookup matched zero rows.
    #[error("no entity found for filter `{0}`")]
    NotFound(String),

    /// A single-entity lookup matched more than one row.
    #[error("{count} entities found for filter `{filter}`, expected exactly one")]
    Ambiguous {
        /// The WHERE clause that was queried.
        filter: String,
        /// Number of rows that matched.
        count: usize,
    },

    /// A foreign-key or related-list mapping key was registered twice.
    #[error("mapping key `{0}` is already registered")]
    DuplicateKey(String),

    /// An UPDATE or DELETE was attempted on an entity with no primary-key
    /// field. The statement is refused rather than executed unfiltered.
    #[error("refusing unfiltered {statement} on `{table}`: entity has no primary-key field")]
    Unguarded {
        /// Table the statement targeted.
        table: &'static str,
        /// Statement kind, `"UPDATE"` or `"DELETE"`.
        statement: &'static str,
    },
}

impl Error {
    /// Whether this error is a structural contract violation rather than a
    /// transient backend failure.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::Ambiguous { .. }
                | Error::DuplicateKey(_)
                | Error::Unguarded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::NotFound("id = 7".into());
        assert_eq!(err.to_string(), "no entity found for filter `id = 7`");

        let err = Error::Ambiguous {
            filter: "name = 'A1'".into(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "3 entities found for filter `name = 'A1'`, expected exactly one"
        );

        let err = Error::Unguarded {
            table: "bay",
            statement: "DELETE",
        };
        assert_eq!(
            err.to_string(),
            "refusing unfiltered DELETE on `bay`: entity has no primary-key field"
        );
    }

    #[test]
    fn test_structural_classification() {
        assert!(Error::DuplicateKey("bay_id".into()).is_structural());
        assert!(
            Error::Unguarded {
                table: "unit",
                statement: "UPDATE"
            }
            .is_structural()
        );
        assert!(!Error::Connection("refused".into()).is_structural());
        assert!(!Error::Execution("syntax".into()).is_structural());
        assert!(!Error::Parse("bad int".into()).is_structural());
    }
}

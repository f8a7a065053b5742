//! Database error taxonomy
//!
//! Every `sqlx::Error` is classified once, at the repository boundary.

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Store unreachable, pool exhausted, or credentials rejected
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// Write rejected by a referential, uniqueness, not-null or check constraint
    #[error("constraint violation: {0}")]
    Constraint(#[source] sqlx::Error),

    /// Malformed statement or any other runtime store error
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Connection,
    Constraint,
    Query,
}

fn classify(e: &sqlx::Error) -> Class {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Configuration(_) => Class::Connection,
        sqlx::Error::Database(db) => {
            // SQLSTATE 08xxx: connection exception, 28xxx: invalid authorization
            let code = db.code();
            if code
                .as_deref()
                .is_some_and(|c| c.starts_with("08") || c.starts_with("28"))
            {
                return Class::Connection;
            }
            match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Class::Constraint,
                _ => Class::Query,
            }
        }
        _ => Class::Query,
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match classify(&e) {
            Class::Connection => Self::Connection(e),
            Class::Constraint => Self::Constraint(e),
            Class::Query => Self::Query(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
        foreign_key: bool,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake error {}", self.code)
        }
    }

    impl StdError for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.foreign_key {
                ErrorKind::ForeignKeyViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn database_error(code: &'static str, foreign_key: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code, foreign_key }))
    }

    #[test]
    fn pool_errors_are_connection_errors() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::Connection(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            DbError::from(sqlx::Error::Io(io)),
            DbError::Connection(_)
        ));
    }

    #[test]
    fn auth_failure_is_connection_error() {
        let err = database_error("28P01", false);
        assert!(matches!(DbError::from(err), DbError::Connection(_)));
    }

    #[test]
    fn foreign_key_violation_is_constraint_error() {
        let err = database_error("23503", true);
        assert!(matches!(DbError::from(err), DbError::Constraint(_)));
    }

    #[test]
    fn syntax_error_is_query_error() {
        let err = database_error("42601", false);
        assert!(matches!(DbError::from(err), DbError::Query(_)));
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Query(_)
        ));
    }

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            resource: "visitor",
            id: "17".into(),
        };
        assert_eq!(err.to_string(), "visitor '17' not found");
    }
}

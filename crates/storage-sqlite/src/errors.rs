//! Error type for the SQLite layer.
//!
//! Diesel and r2d2 failures are wrapped in [`StorageError`] inside this crate
//! and leave it as `budget_core::Error::Database`.

use budget_core::errors::{DatabaseError, Error};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A domain error raised by a write job; passed through untouched.
    #[error(transparent)]
    Core(#[from] Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Core(e) => e,
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(kind, info)) => {
                let reason = match kind {
                    DatabaseErrorKind::NotNullViolation => "missing required value",
                    DatabaseErrorKind::CheckViolation => "check constraint failed",
                    DatabaseErrorKind::UniqueViolation => "duplicate row",
                    _ => "statement rejected",
                };
                Error::Database(DatabaseError::QueryFailed(format!(
                    "{}: {}",
                    reason,
                    info.message()
                )))
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
        }
    }
}

/// `.into_core()` for Diesel and r2d2 results.
pub trait IntoCore<T> {
    fn into_core(self) -> budget_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> budget_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> budget_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::errors::ValidationError;

    #[test]
    fn core_errors_pass_through_unchanged() {
        let original = Error::Validation(ValidationError::UnknownCategory("food".into()));
        let roundtrip: Error = StorageError::from(original).into();
        assert!(matches!(
            roundtrip,
            Error::Validation(ValidationError::UnknownCategory(ref c)) if c == "food"
        ));
    }

    #[test]
    fn not_found_is_a_query_failure() {
        let err: Error = StorageError::from(DieselError::NotFound).into();
        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));
    }
}

//! Shared Diesel error classification for the repositories.
//!
//! Each repository owns its error enum; this module only decides which bucket
//! a Diesel failure belongs in so the mapping stays uniform.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Coarse category of a failed Diesel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// A UNIQUE constraint rejected the write.
    UniqueViolation,
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// Any other query or mutation failure.
    Query(&'static str),
}

/// Classify `error`, logging the driver detail at debug level.
///
/// Driver messages stay in logs; the returned category carries only a fixed
/// description safe to surface.
pub(crate) fn classify_diesel_error(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            DieselFailure::Query("database value conversion error")
        }
        _ => DieselFailure::Query("database error"),
    }
}

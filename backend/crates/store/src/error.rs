//! Store Error Types
//!
//! Two layers of failure:
//! - [`PersistenceFailure`] is what the unit-of-work layer returns for any
//!   storage problem. It keeps the original cause for diagnostics.
//! - [`StoreError`] is what use cases return. `InvalidArgument` means no I/O
//!   happened; `ServiceFailure` wraps a `PersistenceFailure`.

use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Store-specific result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a single unit-of-work step
pub type PersistenceResult<T> = Result<T, PersistenceFailure>;

/// Any failure raised at the storage boundary
///
/// The cause is classified through the kernel's `AppError` conversions, so the
/// message never contains driver or SQL vocabulary.
#[derive(Debug, Error)]
#[error("Persistence failure: {}", .cause.message())]
pub struct PersistenceFailure {
    #[source]
    cause: AppError,
}

impl PersistenceFailure {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            cause: AppError::new(kind, message),
        }
    }

    /// A write that matched no row
    pub fn no_row(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            cause: AppError::not_found(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }
}

impl From<sqlx::Error> for PersistenceFailure {
    fn from(err: sqlx::Error) -> Self {
        Self { cause: err.into() }
    }
}

/// Store-specific error variants
#[derive(Debug, Error)]
pub enum StoreError {
    /// Precondition violated before any I/O. Retrying cannot help.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// Storage was touched and failed
    #[error("{message}")]
    ServiceFailure {
        message: String,
        #[source]
        source: PersistenceFailure,
    },
}

impl StoreError {
    /// Wrap a persistence failure, logging it at the point of translation
    pub fn service_failure(message: impl Into<String>, source: PersistenceFailure) -> Self {
        let message = message.into();
        tracing::error!(error = %source, kind = %source.kind(), "{}", message);
        StoreError::ServiceFailure { message, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidArgument(_) => ErrorKind::BadRequest,
            StoreError::ServiceFailure { source, .. } => match source.kind() {
                // A constraint the service should have prevented is still our fault
                ErrorKind::BadRequest => ErrorKind::InternalServerError,
                kind => kind,
            },
        }
    }

    /// Whether the caller may retry the same request
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::InvalidArgument(_) => false,
            StoreError::ServiceFailure { source, .. } => source.kind().is_retryable(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let app_error = err.to_app_error();
        app_error.with_source(err)
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        if let StoreError::InvalidArgument(reason) = &self {
            tracing::debug!(reason = %reason, "Rejected store request");
        }
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::error::Error;

    #[test]
    fn test_invalid_argument_is_bad_request_and_final() {
        let err = StoreError::InvalidArgument("Can't create store, owner account can't be empty");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(!err.is_retryable());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_service_failure_keeps_cause() {
        let cause = PersistenceFailure::new(ErrorKind::ServiceUnavailable, "Database unavailable");
        let err = StoreError::service_failure("Can't save new store in DB", cause);

        assert_eq!(err.to_string(), "Can't save new store in DB");
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert!(err.is_retryable());

        let source = err.source().unwrap();
        assert!(source.to_string().contains("Database unavailable"));
    }

    #[test]
    fn test_service_failure_kind_mapping() {
        let not_found = StoreError::service_failure(
            "Can't update store in DB",
            PersistenceFailure::no_row("No store with this id"),
        );
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert!(!not_found.is_retryable());

        let constraint = StoreError::service_failure(
            "Can't save new store in DB",
            PersistenceFailure::new(ErrorKind::BadRequest, "Required field is null"),
        );
        assert_eq!(constraint.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_sqlx_error_becomes_persistence_failure() {
        let failure: PersistenceFailure = sqlx::Error::PoolTimedOut.into();
        assert_eq!(failure.kind(), ErrorKind::ServiceUnavailable);
        assert!(!failure.to_string().contains("PoolTimedOut"));
    }

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(StoreError, StatusCode)> = vec![
            (
                StoreError::InvalidArgument("Can't create store, store is missing"),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::service_failure(
                    "Can't save new store in DB",
                    PersistenceFailure::new(ErrorKind::InternalServerError, "Database error"),
                ),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                StoreError::service_failure(
                    "Can't update store in DB",
                    PersistenceFailure::no_row("No store with this id"),
                ),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }
}

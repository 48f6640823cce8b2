//! Error conversions - From implementations for infrastructure error types
//!
//! Storage errors are classified here once so no feature crate has to know
//! PostgreSQL error codes, and no storage vocabulary reaches API clients.

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool closed").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL specific error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        // Class 23 - Integrity Constraint Violation
                        "23000" => AppError::conflict("Integrity constraint violation"),
                        "23001" => AppError::conflict("Restrict violation"),
                        "23502" => AppError::bad_request("Required field is null"),
                        "23503" => AppError::conflict("Foreign key violation"),
                        "23505" => AppError::conflict("Duplicate key value"),
                        "23514" => AppError::bad_request("Check constraint violation"),
                        // Class 40 - Transaction Rollback (serialization, deadlock)
                        "40001" | "40P01" => {
                            AppError::service_unavailable("Transaction conflict, retry later")
                        }
                        // Class 42 - Syntax Error or Access Rule Violation
                        "42501" => AppError::new(ErrorKind::Forbidden, "Insufficient privilege"),
                        // Class 53 - Insufficient Resources
                        "53000" | "53100" | "53200" | "53300" => {
                            AppError::service_unavailable("Database resource exhausted")
                        }
                        // Class 57 - Operator Intervention
                        "57000" | "57014" | "57P01" | "57P02" | "57P03" => {
                            AppError::service_unavailable("Database unavailable")
                        }
                        _ => AppError::internal("Database error"),
                    }
                } else {
                    AppError::internal("Database error")
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::TimedOut => {
                AppError::new(ErrorKind::RequestTimeout, "Database operation timed out")
                    .with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            sqlx::Error::Protocol(_) => {
                AppError::internal("Database protocol error").with_source(err)
            }
            sqlx::Error::Tls(_) => AppError::internal("Database TLS error").with_source(err),
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::reply::ReplyObject;
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Same envelope as successful replies, only the message is exposed
        (status, Json(ReplyObject::error(self.message()))).into_response()
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod sqlx_tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_row_not_found_conversion() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
        assert!(app_err.source().is_some());
    }

    #[test]
    fn test_pool_timeout_is_retryable() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert!(app_err.is_retryable());
    }

    #[test]
    fn test_io_timeout_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        let app_err: AppError = sqlx::Error::Io(io_err).into();
        assert_eq!(app_err.kind(), ErrorKind::RequestTimeout);
        assert!(!app_err.message().contains("read timed out"));
    }
}

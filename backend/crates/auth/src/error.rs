//! Auth Error Types
//!
//! Login never propagates these to the caller. Each one is logged and turned
//! into a negative reply carrying its message.

use kernel::error::kind::ErrorKind;
use kernel::reply::ReplyObject;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password failed format validation
    #[error("Wrong parameters")]
    InvalidParameters,

    /// No account for the given email
    #[error("Account not found")]
    AccountNotFound,

    /// The authentication capability refused to issue a token
    #[error("{0}")]
    AuthenticationRejected(String),

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidParameters => ErrorKind::BadRequest,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::AuthenticationRejected(_) => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AccountNotFound => {
                tracing::warn!("Login attempt for unknown account");
            }
            AuthError::AuthenticationRejected(reason) => {
                tracing::warn!(reason = %reason, "Authentication rejected");
            }
            AuthError::InvalidParameters => {
                tracing::debug!("Login rejected, malformed credentials");
            }
        }
    }

    /// Negative reply for this error
    pub fn to_reply(&self) -> ReplyObject {
        ReplyObject::error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AuthError::InvalidParameters.kind(), ErrorKind::BadRequest);
        assert_eq!(AuthError::AccountNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AuthError::AuthenticationRejected("Account is disabled".into()).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            AuthError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::InternalServerError
        );
        assert_eq!(
            AuthError::Internal("Invalid token secret".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_reply_carries_message() {
        let reply = AuthError::AccountNotFound.to_reply();
        assert!(!reply.is_success());
        assert_eq!(reply.message(), Some("Account not found"));

        let reply = AuthError::InvalidParameters.to_reply();
        assert_eq!(reply.message(), Some("Wrong parameters"));
    }

    #[test]
    fn test_database_message_hides_driver_detail() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Database error");
    }
}

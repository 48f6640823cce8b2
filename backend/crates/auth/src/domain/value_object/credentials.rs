//! Login Credentials
//!
//! Email plus clear text password, validated for format only. Dropping the
//! value zeroizes the password buffer.

use platform::password::ClearTextPassword;

use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Validated login form
pub struct Credentials {
    pub email: Email,
    pub password: ClearTextPassword,
}

impl Credentials {
    /// Validate both fields
    ///
    /// Any format problem, including a missing field, is reported as
    /// `InvalidParameters` without saying which field failed.
    pub fn parse(email: Option<&str>, password: Option<String>) -> AuthResult<Self> {
        let email = email
            .and_then(|email| Email::new(email).ok())
            .ok_or(AuthError::InvalidParameters)?;
        let password = password
            .and_then(|password| ClearTextPassword::new(password).ok())
            .ok_or(AuthError::InvalidParameters)?;

        Ok(Self { email, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let credentials =
            Credentials::parse(Some("Alice@Example.com"), Some("validPass1".to_string())).unwrap();
        assert_eq!(credentials.email.as_str(), "alice@example.com");
        assert_eq!(credentials.password.char_count(), 10);
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        let cases = [
            (Some("not-an-email"), Some("validPass1")),
            (Some("alice@example.com"), Some("x")),
            (None, Some("validPass1")),
            (Some("alice@example.com"), None),
        ];

        for (email, password) in cases {
            let result = Credentials::parse(email, password.map(str::to_string));
            assert!(matches!(result, Err(AuthError::InvalidParameters)));
        }
    }
}

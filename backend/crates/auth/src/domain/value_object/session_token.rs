//! Session Token Value Object

use std::fmt;

/// Opaque token issued by the authenticator
///
/// The login flow only carries it to the caller. Debug output is redacted so
/// the token never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let token = SessionToken::new("secret-token-value");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret-token-value"));
        assert_eq!(token.as_str(), "secret-token-value");
    }
}

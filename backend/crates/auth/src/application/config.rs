//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token secret key for HMAC signing (32 bytes)
    pub token_secret: [u8; 32],
    /// How long an issued token stays valid (12 hours)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(12 * 3600),
        }
    }
}

impl AuthConfig {
    /// Create config with a given token secret
    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens issued with it do not survive a restart.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self::with_secret(secret)
    }

    /// Get token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

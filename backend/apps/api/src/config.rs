//! Server Configuration
//!
//! Everything the binary needs, read once from the environment at startup.
//! Missing or malformed values stop the process before it binds a socket.

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// API server configuration
#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    /// Load from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let auth = match lookup("AUTH_TOKEN_SECRET") {
            Some(secret_b64) => AuthConfig::with_secret(decode_secret(&secret_b64)?),
            None if cfg!(debug_assertions) => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig::with_random_secret()
            }
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("AUTH_TOKEN_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("AUTH_TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/stores")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:31113".parse().unwrap());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_database_url_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let secret = general_purpose::STANDARD.encode([3u8; 32]);
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/stores"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("FRONTEND_ORIGINS", "https://shop.example.com, "),
            ("AUTH_TOKEN_SECRET", &secret),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.frontend_origins, vec!["https://shop.example.com"]);
        assert_eq!(config.auth.token_secret, [3u8; 32]);
    }

    #[test]
    fn test_bad_values_fail() {
        let short_secret = general_purpose::STANDARD.encode([3u8; 16]);
        assert!(load(&[
            ("DATABASE_URL", "postgres://localhost/stores"),
            ("AUTH_TOKEN_SECRET", &short_secret),
        ])
        .is_err());
        assert!(load(&[
            ("DATABASE_URL", "postgres://localhost/stores"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ])
        .is_err());
        assert!(load(&[
            ("DATABASE_URL", "postgres://localhost/stores"),
            ("BIND_ADDR", "nowhere"),
        ])
        .is_err());
    }
}

//! HMAC Token Authenticator
//!
//! Token format: `{account_id}.{expires_at_ms}.{signature}` where the
//! signature is base64url(HMAC-SHA256(secret, "{account_id}.{expires_at_ms}")).

use std::sync::Arc;

use chrono::Utc;
use hmac::{Hmac, Mac};
use kernel::id::AccountId;
use platform::crypto::to_base64_url;
use sha2::Sha256;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::Authenticator;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Stateless token issuer signing with the configured secret
#[derive(Clone)]
pub struct HmacTokenAuthenticator {
    config: Arc<AuthConfig>,
}

impl HmacTokenAuthenticator {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    fn sign(&self, payload: &str) -> AuthResult<String> {
        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .map_err(|e| AuthError::Internal(format!("Invalid token secret: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(to_base64_url(&mac.finalize().into_bytes()))
    }

    /// Issue a token for `account_id` valid until `expires_at_ms`
    pub fn issue(&self, account_id: &AccountId, expires_at_ms: i64) -> AuthResult<SessionToken> {
        let payload = format!("{}.{}", account_id, expires_at_ms);
        let signature = self.sign(&payload)?;
        Ok(SessionToken::new(format!("{}.{}", payload, signature)))
    }
}

impl Authenticator for HmacTokenAuthenticator {
    async fn authenticate(&self, account: &Account) -> AuthResult<SessionToken> {
        let expires_at_ms = Utc::now().timestamp_millis() + self.config.token_ttl_ms();
        self.issue(&account.account_id, expires_at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator(secret: [u8; 32]) -> HmacTokenAuthenticator {
        HmacTokenAuthenticator::new(Arc::new(AuthConfig::with_secret(secret)))
    }

    #[test]
    fn test_token_format() {
        let account_id = AccountId::new();
        let token = authenticator([1u8; 32])
            .issue(&account_id, 1_700_000_000_000)
            .unwrap();

        let parts: Vec<&str> = token.as_str().split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], account_id.to_string());
        assert_eq!(parts[1], "1700000000000");
        // 32-byte HMAC, base64url without padding
        assert_eq!(parts[2].len(), 43);
        assert!(!parts[2].contains('='));
    }

    #[test]
    fn test_signature_rfc4231_case_1() {
        // RFC 4231 uses a 20-byte key; HMAC zero-pads keys to the block size,
        // so the same key padded to 32 bytes yields the published MAC.
        let mut secret = [0u8; 32];
        secret[..20].copy_from_slice(&[0x0bu8; 20]);
        let expected =
            hex::decode("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
                .unwrap();

        let signature = authenticator(secret).sign("Hi There").unwrap();
        assert_eq!(signature, to_base64_url(&expected));
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let account_id = AccountId::new();
        let a = authenticator([1u8; 32]).issue(&account_id, 1_700_000_000_000).unwrap();
        let b = authenticator([2u8; 32]).issue(&account_id, 1_700_000_000_000).unwrap();
        let again = authenticator([1u8; 32]).issue(&account_id, 1_700_000_000_000).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, again);
    }

    #[tokio::test]
    async fn test_authenticate_sets_expiry_from_ttl() {
        let auth = authenticator([1u8; 32]);
        let account = Account {
            account_id: AccountId::new(),
            email: crate::domain::value_object::email::Email::new("alice@example.com").unwrap(),
            created_at: Utc::now(),
        };

        let before = Utc::now().timestamp_millis();
        let token = auth.authenticate(&account).await.unwrap();
        let expires_at_ms: i64 = token.as_str().split('.').nth(1).unwrap().parse().unwrap();

        let ttl_ms = AuthConfig::default().token_ttl_ms();
        assert!(expires_at_ms >= before + ttl_ms);
        assert!(expires_at_ms <= Utc::now().timestamp_millis() + ttl_ms);
    }
}

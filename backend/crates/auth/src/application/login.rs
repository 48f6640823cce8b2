//! Login Use Case
//!
//! Exchanges credentials for a session token. The outcome is always a reply,
//! never an error: `{success: true, token}` or `{success: false, message}`.

use std::sync::Arc;

use kernel::reply::ReplyObject;

use crate::domain::repository::{AccountLookup, Authenticator};
use crate::domain::value_object::{credentials::Credentials, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

/// Login input, as received
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login use case
pub struct LoginUseCase<L, A>
where
    L: AccountLookup,
    A: Authenticator,
{
    accounts: Arc<L>,
    authenticator: Arc<A>,
}

impl<L, A> LoginUseCase<L, A>
where
    L: AccountLookup,
    A: Authenticator,
{
    pub fn new(accounts: Arc<L>, authenticator: Arc<A>) -> Self {
        Self {
            accounts,
            authenticator,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> ReplyObject {
        let outcome = match Credentials::parse(input.email.as_deref(), input.password) {
            Ok(credentials) => self.authenticate(credentials).await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(token) => ReplyObject::success("token", token.as_str()),
            Err(err) => {
                err.log();
                err.to_reply()
            }
        }
    }

    async fn authenticate(&self, credentials: Credentials) -> AuthResult<SessionToken> {
        let account = self
            .accounts
            .get_account_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Password buffer is zeroized here, before the token is requested
        drop(credentials);

        let token = self.authenticator.authenticate(&account).await?;

        tracing::info!(account_id = %account.account_id, "Login succeeded");

        Ok(token)
    }
}

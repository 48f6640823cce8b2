//! Capability Traits
//!
//! What login needs from the outside: resolving an account and getting a
//! token issued for it. Implementations are in the infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{email::Email, session_token::SessionToken};
use crate::error::AuthResult;

/// Account lookup trait
#[trait_variant::make(AccountLookup: Send)]
pub trait LocalAccountLookup {
    /// Find the account registered under `email`
    async fn get_account_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;
}

/// Token issuing trait
#[trait_variant::make(Authenticator: Send)]
pub trait LocalAuthenticator {
    /// Issue a session token for `account`
    ///
    /// Returns `AuthenticationRejected` when the account may not log in.
    async fn authenticate(&self, account: &Account) -> AuthResult<SessionToken>;
}

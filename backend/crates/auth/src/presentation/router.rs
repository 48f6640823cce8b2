//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountLookup, Authenticator};
use crate::infra::postgres::PgAccountRepository;
use crate::infra::token::HmacTokenAuthenticator;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL account lookup and HMAC tokens
pub fn auth_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    let authenticator = HmacTokenAuthenticator::new(Arc::new(config));
    auth_router_generic(repo, authenticator)
}

/// Create a generic Auth router for any capability implementation
pub fn auth_router_generic<L, A>(accounts: L, authenticator: A) -> Router
where
    L: AccountLookup + Clone + Send + Sync + 'static,
    A: Authenticator + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        accounts: Arc::new(accounts),
        authenticator: Arc::new(authenticator),
    };

    Router::new()
        .route("/login", post(handlers::login::<L, A>))
        .with_state(state)
}

//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::reply::ReplyObject;
use std::sync::Arc;

use crate::application::{LoginInput, LoginUseCase};
use crate::domain::repository::{AccountLookup, Authenticator};
use crate::presentation::dto::LoginRequest;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<L, A>
where
    L: AccountLookup + Clone + Send + Sync + 'static,
    A: Authenticator + Clone + Send + Sync + 'static,
{
    pub accounts: Arc<L>,
    pub authenticator: Arc<A>,
}

/// POST /api/auth/login
///
/// Always answers 200 with a reply envelope. A body that is not valid JSON is
/// treated like invalid credentials.
pub async fn login<L, A>(
    State(state): State<AuthAppState<L, A>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Json<ReplyObject>
where
    L: AccountLookup + Clone + Send + Sync + 'static,
    A: Authenticator + Clone + Send + Sync + 'static,
{
    let input = match body {
        Ok(Json(req)) => LoginInput::from(req),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable login body");
            LoginInput {
                email: None,
                password: None,
            }
        }
    };

    let use_case = LoginUseCase::new(state.accounts.clone(), state.authenticator.clone());
    Json(use_case.execute(input).await)
}

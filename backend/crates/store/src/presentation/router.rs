//! Store Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::unit_of_work::StoreStorage;
use crate::infra::postgres::PgStoreStorage;
use crate::presentation::handlers::{self, StoreAppState};

/// Create the Store router with PostgreSQL storage
pub fn store_router(storage: PgStoreStorage) -> Router {
    store_router_generic(storage)
}

/// Create a generic Store router for any storage implementation
pub fn store_router_generic<S>(storage: S) -> Router
where
    S: StoreStorage + Clone + 'static,
{
    let state = StoreAppState {
        storage: Arc::new(storage),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_store::<S>)
                .put(handlers::update_store::<S>)
                .get(handlers::list_stores::<S>),
        )
        .route("/{id}", get(handlers::get_store::<S>))
        .with_state(state)
}

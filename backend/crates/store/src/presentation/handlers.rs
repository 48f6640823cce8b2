//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use kernel::id::StoreId;
use kernel::reply::ReplyObject;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateStoreUseCase, GetStoreUseCase, ListStoresUseCase, UpdateStoreUseCase,
};
use crate::domain::entities::Store;
use crate::domain::unit_of_work::StoreStorage;
use crate::error::{StoreError, StoreResult};
use crate::presentation::dto::{StoreRequest, StoreResponse};

/// Store from a JSON body, or `None` for a `null` body
///
/// An unreadable body is rejected with the same envelope as any other invalid
/// argument, so parser details never reach the client.
fn read_body(
    body: Result<Json<Option<StoreRequest>>, JsonRejection>,
) -> StoreResult<Option<Store>> {
    match body {
        Ok(Json(req)) => Ok(req.map(Store::from)),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable store body");
            Err(StoreError::InvalidArgument("Can't read store, malformed request body"))
        }
    }
}

/// Shared state for store handlers
#[derive(Clone)]
pub struct StoreAppState<S>
where
    S: StoreStorage + Clone + 'static,
{
    pub storage: Arc<S>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/stores
///
/// A `null` body reaches the use case as a missing store.
pub async fn create_store<S>(
    State(state): State<StoreAppState<S>>,
    body: Result<Json<Option<StoreRequest>>, JsonRejection>,
) -> StoreResult<Json<ReplyObject>>
where
    S: StoreStorage + Clone + 'static,
{
    let store = read_body(body)?;
    let use_case = CreateStoreUseCase::new(state.storage.clone());
    let store = use_case.execute(store).await?;

    Ok(Json(ReplyObject::success("store", StoreResponse::from(store))))
}

// ============================================================================
// Read
// ============================================================================

/// GET /api/stores
pub async fn list_stores<S>(State(state): State<StoreAppState<S>>) -> StoreResult<Json<ReplyObject>>
where
    S: StoreStorage + Clone + 'static,
{
    let use_case = ListStoresUseCase::new(state.storage.clone());
    let stores: Vec<StoreResponse> = use_case
        .execute()
        .await?
        .into_iter()
        .map(StoreResponse::from)
        .collect();

    Ok(Json(ReplyObject::success("stores", stores)))
}

/// GET /api/stores/{id}
pub async fn get_store<S>(
    State(state): State<StoreAppState<S>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> StoreResult<Json<ReplyObject>>
where
    S: StoreStorage + Clone + 'static,
{
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable store id");
        StoreError::InvalidArgument("Can't get store, id is not a valid UUID")
    })?;

    let use_case = GetStoreUseCase::new(state.storage.clone());
    let store = use_case.execute(&StoreId::from_uuid(id)).await?;

    Ok(Json(ReplyObject::success("store", StoreResponse::from(store))))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/stores
pub async fn update_store<S>(
    State(state): State<StoreAppState<S>>,
    body: Result<Json<Option<StoreRequest>>, JsonRejection>,
) -> StoreResult<Json<ReplyObject>>
where
    S: StoreStorage + Clone + 'static,
{
    let store = read_body(body)?;
    let use_case = UpdateStoreUseCase::new(state.storage.clone());
    use_case.execute(store).await?;

    Ok(Json(ReplyObject::ok()))
}

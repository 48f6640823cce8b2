//! Update Store Use Case

use std::sync::Arc;

use crate::application::unit_of_work::finish;
use crate::domain::entities::{Store, StoreRecord};
use crate::domain::unit_of_work::{StoreStorage, StoreUnitOfWork};
use crate::error::{StoreError, StoreResult};

const UPDATE_FAILED: &str = "Can't update store in DB";

/// Update Store Use Case
pub struct UpdateStoreUseCase<S>
where
    S: StoreStorage,
{
    storage: Arc<S>,
}

impl<S> UpdateStoreUseCase<S>
where
    S: StoreStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Overwrite an existing store
    ///
    /// The id is never reassigned. It must name a row that already exists,
    /// otherwise the update fails with a `NotFound` service failure.
    pub async fn execute(&self, store: Option<Store>) -> StoreResult<()> {
        let store = store.ok_or(StoreError::InvalidArgument("Can't update store, store is missing"))?;
        let owner = store.owner.ok_or(StoreError::InvalidArgument(
            "Can't update store with empty owner account",
        ))?;
        let store_id = store
            .id
            .ok_or(StoreError::InvalidArgument("Can't update store without id"))?;

        let record = StoreRecord::new(store_id, owner, &store);

        let mut unit_of_work = self
            .storage
            .open()
            .await
            .map_err(|e| StoreError::service_failure(UPDATE_FAILED, e))?;
        let outcome = unit_of_work.update(&record).await;
        finish(unit_of_work, outcome)
            .await
            .map_err(|e| StoreError::service_failure(UPDATE_FAILED, e))?;

        tracing::info!(
            store_id = %store_id,
            owner = %owner,
            "Updated store"
        );

        Ok(())
    }
}

//! Create Store Use Case

use std::sync::Arc;

use kernel::id::StoreId;

use crate::application::unit_of_work::finish;
use crate::domain::entities::{Store, StoreRecord};
use crate::domain::unit_of_work::{StoreStorage, StoreUnitOfWork};
use crate::error::{StoreError, StoreResult};

const SAVE_FAILED: &str = "Can't save new store in DB";

/// Create Store Use Case
pub struct CreateStoreUseCase<S>
where
    S: StoreStorage,
{
    storage: Arc<S>,
}

impl<S> CreateStoreUseCase<S>
where
    S: StoreStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Assign a fresh id to `store` and persist it
    ///
    /// Returns the store as written, carrying the new id.
    pub async fn execute(&self, store: Option<Store>) -> StoreResult<Store> {
        let mut store =
            store.ok_or(StoreError::InvalidArgument("Can't create store, store is missing"))?;
        let owner = store.owner.ok_or(StoreError::InvalidArgument(
            "Can't create store, owner account can't be empty",
        ))?;

        let store_id = StoreId::new();
        store.id = Some(store_id);
        let record = StoreRecord::new(store_id, owner, &store);

        let mut unit_of_work = self
            .storage
            .open()
            .await
            .map_err(|e| StoreError::service_failure(SAVE_FAILED, e))?;
        let outcome = unit_of_work.create(&record).await;
        finish(unit_of_work, outcome)
            .await
            .map_err(|e| StoreError::service_failure(SAVE_FAILED, e))?;

        tracing::info!(
            store_id = %store_id,
            owner = %owner,
            "Created new store"
        );

        Ok(Store::from(record))
    }
}

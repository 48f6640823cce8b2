//! Get Store Use Case

use std::sync::Arc;

use kernel::id::StoreId;

use crate::application::unit_of_work::finish;
use crate::domain::entities::Store;
use crate::domain::unit_of_work::{StoreStorage, StoreUnitOfWork};
use crate::error::{StoreError, StoreResult};

/// Get Store Use Case
pub struct GetStoreUseCase<S>
where
    S: StoreStorage,
{
    storage: Arc<S>,
}

impl<S> GetStoreUseCase<S>
where
    S: StoreStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Look a store up by id
    ///
    /// An unknown id is not an error: the result is `Store::default()`, with
    /// every field empty.
    pub async fn execute(&self, id: &StoreId) -> StoreResult<Store> {
        let failed = || format!("Can't get store with id [{}]", id);

        let mut unit_of_work = self
            .storage
            .open()
            .await
            .map_err(|e| StoreError::service_failure(failed(), e))?;
        let outcome = unit_of_work.find_by_id(id).await;
        let record = finish(unit_of_work, outcome)
            .await
            .map_err(|e| StoreError::service_failure(failed(), e))?;

        if record.is_none() {
            tracing::debug!(store_id = %id, "No store with this id, returning empty store");
        }

        Ok(record.map(Store::from).unwrap_or_default())
    }
}

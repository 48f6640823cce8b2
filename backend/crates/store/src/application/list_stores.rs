//! List Stores Use Case

use std::sync::Arc;

use crate::application::unit_of_work::finish;
use crate::domain::entities::Store;
use crate::domain::unit_of_work::{StoreStorage, StoreUnitOfWork};
use crate::error::{StoreError, StoreResult};

const LIST_FAILED: &str = "Can't get stores";

/// List Stores Use Case
pub struct ListStoresUseCase<S>
where
    S: StoreStorage,
{
    storage: Arc<S>,
}

impl<S> ListStoresUseCase<S>
where
    S: StoreStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub async fn execute(&self) -> StoreResult<Vec<Store>> {
        let mut unit_of_work = self
            .storage
            .open()
            .await
            .map_err(|e| StoreError::service_failure(LIST_FAILED, e))?;
        let outcome = unit_of_work.find_all().await;
        let records = finish(unit_of_work, outcome)
            .await
            .map_err(|e| StoreError::service_failure(LIST_FAILED, e))?;

        Ok(records.into_iter().map(Store::from).collect())
    }
}

//! Unit-of-Work Traits
//!
//! Storage is reached only through a unit-of-work: `open` starts a
//! transaction, one persistence action runs inside it, then it is committed or
//! rolled back. Implementations live in the infrastructure layer.
//!
//! Implementations must roll back when a unit-of-work is dropped without
//! `commit` or `rollback`, so an early return or a cancelled request never
//! leaves a transaction open.

use std::future::Future;

use kernel::id::StoreId;

use crate::domain::entities::StoreRecord;
use crate::error::PersistenceResult;

/// One open transaction against store storage
#[trait_variant::make(StoreUnitOfWork: Send)]
pub trait LocalStoreUnitOfWork: Sized {
    /// Insert a new store row
    async fn create(&mut self, record: &StoreRecord) -> PersistenceResult<()>;

    /// Find a store row by id
    async fn find_by_id(&mut self, id: &StoreId) -> PersistenceResult<Option<StoreRecord>>;

    /// All store rows, oldest first
    async fn find_all(&mut self) -> PersistenceResult<Vec<StoreRecord>>;

    /// Overwrite an existing row. Fails when no row has `record.id`.
    async fn update(&mut self, record: &StoreRecord) -> PersistenceResult<()>;

    /// Make the work visible and release the transaction
    async fn commit(self) -> PersistenceResult<()>;

    /// Discard the work and release the transaction
    async fn rollback(self) -> PersistenceResult<()>;
}

/// Source of units-of-work
///
/// Each call to `open` hands out a fresh unit-of-work owned by the caller. It
/// is never cached or shared between operations.
pub trait StoreStorage: Send + Sync {
    type UnitOfWork: StoreUnitOfWork;

    /// Begin a new unit-of-work
    fn open(&self) -> impl Future<Output = PersistenceResult<Self::UnitOfWork>> + Send;
}

//! PostgreSQL Unit-of-Work Implementation

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, StoreId};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::entities::StoreRecord;
use crate::domain::unit_of_work::{StoreStorage, StoreUnitOfWork};
use crate::error::{PersistenceFailure, PersistenceResult};

/// PostgreSQL-backed store storage
#[derive(Clone)]
pub struct PgStoreStorage {
    pool: PgPool,
}

impl PgStoreStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl StoreStorage for PgStoreStorage {
    type UnitOfWork = PgStoreUnitOfWork;

    async fn open(&self) -> PersistenceResult<PgStoreUnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(PgStoreUnitOfWork { tx })
    }
}

/// One PostgreSQL transaction
///
/// Dropping it without `commit` rolls the transaction back (sqlx returns the
/// connection to the pool with a pending `ROLLBACK`).
pub struct PgStoreUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl StoreUnitOfWork for PgStoreUnitOfWork {
    async fn create(&mut self, record: &StoreRecord) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO stores (
                store_id,
                owner_id,
                name,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.owner.as_uuid())
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&mut *self.tx)
        .await?;

        tracing::debug!(store_id = %record.id, "Store row inserted");

        Ok(())
    }

    async fn find_by_id(&mut self, id: &StoreId) -> PersistenceResult<Option<StoreRecord>> {
        let row = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT
                store_id,
                owner_id,
                name,
                description,
                created_at,
                updated_at
            FROM stores
            WHERE store_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(row.map(StoreRow::into_record))
    }

    async fn find_all(&mut self) -> PersistenceResult<Vec<StoreRecord>> {
        let rows = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT
                store_id,
                owner_id,
                name,
                description,
                created_at,
                updated_at
            FROM stores
            ORDER BY created_at ASC, store_id ASC
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(rows.into_iter().map(StoreRow::into_record).collect())
    }

    async fn update(&mut self, record: &StoreRecord) -> PersistenceResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE stores SET
                owner_id = $2,
                name = $3,
                description = $4,
                updated_at = $5
            WHERE store_id = $1
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.owner.as_uuid())
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.updated_at)
        .execute(&mut *self.tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(PersistenceFailure::no_row("No store with this id"));
        }

        tracing::debug!(store_id = %record.id, "Store row updated");

        Ok(())
    }

    async fn commit(self) -> PersistenceResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> PersistenceResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct StoreRow {
    store_id: Uuid,
    owner_id: Uuid,
    name: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoreRow {
    fn into_record(self) -> StoreRecord {
        StoreRecord {
            id: StoreId::from_uuid(self.store_id),
            owner: AccountId::from_uuid(self.owner_id),
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

//! Unit-of-Work closing
//!
//! Every use case ends its unit-of-work through [`finish`]: the outcome of the
//! single persistence action decides between commit and rollback.

use crate::domain::unit_of_work::StoreUnitOfWork;
use crate::error::PersistenceResult;

/// Commit when `outcome` is `Ok`, roll back otherwise
///
/// A failed commit is returned as the result. A failed rollback is only
/// logged, the original failure is what the caller needs to see.
pub async fn finish<U, T>(unit_of_work: U, outcome: PersistenceResult<T>) -> PersistenceResult<T>
where
    U: StoreUnitOfWork,
    T: Send,
{
    match outcome {
        Ok(value) => {
            unit_of_work.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = unit_of_work.rollback().await {
                tracing::warn!(
                    error = %rollback_err,
                    cause = %err,
                    "Rollback failed after persistence failure"
                );
            }
            Err(err)
        }
    }
}

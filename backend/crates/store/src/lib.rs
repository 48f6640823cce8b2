//! Store Management Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Store entity, unit-of-work traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL unit-of-work
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Transaction Model
//! - Every operation opens its own unit-of-work and closes it before returning
//! - Success commits, failure rolls back, a dropped unit-of-work rolls back
//! - Precondition failures are raised before any unit-of-work is opened

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::Store;
pub use error::{PersistenceFailure, StoreError, StoreResult};
pub use infra::postgres::PgStoreStorage;
pub use presentation::router::store_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

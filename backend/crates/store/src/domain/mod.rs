//! Domain Layer
//!
//! Contains the store entity and the unit-of-work traits.

pub mod entities;
pub mod unit_of_work;

// Re-exports
pub use entities::{Store, StoreRecord};
pub use unit_of_work::{StoreStorage, StoreUnitOfWork};

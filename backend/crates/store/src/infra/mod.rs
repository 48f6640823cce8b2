//! Infrastructure Layer
//!
//! Database implementations of the unit-of-work traits.

pub mod postgres;

pub use postgres::{PgStoreStorage, PgStoreUnitOfWork};

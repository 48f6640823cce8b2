//! Domain Layer
//!
//! Contains entities, value objects, and capability traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use repository::{AccountLookup, Authenticator};

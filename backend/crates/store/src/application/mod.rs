//! Application Layer - Use Cases
//!
//! Each use case opens exactly one unit-of-work, runs one persistence action
//! in it and closes it before returning.

pub mod create_store;
pub mod get_store;
pub mod list_stores;
pub mod unit_of_work;
pub mod update_store;

// Re-exports
pub use create_store::CreateStoreUseCase;
pub use get_store::GetStoreUseCase;
pub use list_stores::ListStoresUseCase;
pub use update_store::UpdateStoreUseCase;

//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};

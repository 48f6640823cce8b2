//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed entity identifiers
//! - The uniform reply envelope returned to API clients
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the store and auth crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod reply;

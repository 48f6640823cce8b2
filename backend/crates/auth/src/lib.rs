//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account, credentials, capability traits
//! - `application/` - Login use case and configuration
//! - `infra/` - PostgreSQL account lookup, HMAC token issuing
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Login Flow
//! - Email and password are validated for format only
//! - The account is resolved by email, then a token is issued for it
//! - Every failure becomes a `{success: false, message}` reply
//!
//! ## Security Model
//! - Password buffers are zeroized on drop and never logged
//! - Tokens are HMAC-SHA256 signed and carry their own expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{postgres::PgAccountRepository, token::HmacTokenAuthenticator};
pub use presentation::router::auth_router;

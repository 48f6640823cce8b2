//! Infrastructure Layer
//!
//! Database implementations and token issuing.

pub mod postgres;
pub mod token;

pub use postgres::PgAccountRepository;
pub use token::HmacTokenAuthenticator;

//! Value Object Module

pub mod credentials;
pub mod email;
pub mod session_token;

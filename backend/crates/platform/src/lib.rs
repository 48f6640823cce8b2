//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (URL-safe Base64, random bytes)
//! - Password format policy (NIST SP 800-63B length rules) with zeroization

pub mod crypto;
pub mod password;

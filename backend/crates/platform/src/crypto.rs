//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as URL-safe base64 without padding (token segments)
pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        assert_eq!(random_bytes(32).len(), 32);
        assert!(random_bytes(0).is_empty());
        assert_ne!(random_bytes(16), random_bytes(16));
    }

    #[test]
    fn test_base64_url_alphabet() {
        // 0xfb 0xff 0xfe encodes to "+//+" in the standard alphabet
        assert_eq!(to_base64_url(&[0xfb, 0xff, 0xfe]), "-__-");
        assert_eq!(to_base64_url(b"ab"), "YWI");
    }
}

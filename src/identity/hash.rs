/// SHA-256 helper for identifier derivation
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of `value`'s bytes (64 characters)
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

//! One-way salted password hashing.
//!
//! bcrypt embeds its per-record salt in the hash string, so no separate
//! salt column is needed. Hashing and verification are CPU-bound; callers
//! on the request path must run them through `tokio::task::spawn_blocking`
//! (see `services::users`) so they never stall the actix workers.

use bcrypt::{hash, verify};

use crate::AppError;

/// bcrypt work factor.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    hash(plain, HASH_COST).map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Constant-time comparison of a plaintext password against a stored hash.
/// Never compares plaintext directly.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, AppError> {
    verify(plain, hashed)
        .map_err(|e| AppError::internal(format!("Failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn test_hash_verify_roundtrip() {
        let hashed = hash_password("pw123").unwrap();
        assert!(verify_password("pw123", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hashed = hash_password("pw123").unwrap();
        assert!(!verify_password("pw124", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differ() {
        // Fresh salt per hash
        let a = hash_password("pw123").unwrap();
        let b = hash_password("pw123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(verify_password("pw123", "not-a-bcrypt-hash").is_err());
    }
}

/**
 * Password Hashing
 *
 * bcrypt with a per-record salt. Hashing happens once at signup; login
 * re-runs the comparison against the stored hash. Plaintext passwords are
 * never logged or persisted.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::auth::error::AuthError;

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AuthError::Internal("password hashing failed".to_string())
    })
}

/// Compare a plaintext password against a stored hash.
///
/// Returns `Ok(false)` for a mismatch; `Err` means the stored hash itself
/// could not be processed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    verify(password, password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AuthError::Internal("password verification failed".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password("secret2", &hash).unwrap());
        // One changed character is enough
        assert!(!verify_password("Secret1", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash1 = hash_password("secret1").unwrap();
        let hash2 = hash_password("secret1").unwrap();
        assert_ne!(hash1, hash2);

        assert!(verify_password("secret1", &hash1).unwrap());
        assert!(verify_password("secret1", &hash2).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("secret1", "not-a-bcrypt-hash").is_err());
    }
}

//! Password hashing and verification.
//!
//! Argon2id with per-hash random salts. The same helpers back both login
//! passwords and the per-admin verification keys.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::core::error::{AppError, Result};

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash format: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_salted() {
        let password = "SecurePassword123";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        // Different salt each time
        assert_ne!(hash, hash_password(password).unwrap());
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("SecurePassword123").unwrap();

        assert!(verify_password("SecurePassword123", &hash).unwrap());
        assert!(!verify_password("WrongPassword123", &hash).unwrap());
    }
}

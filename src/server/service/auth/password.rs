//! Password hashing and verification using Argon2
//!
//! Hashes are stored as PHC strings, which embed the salt and the Argon2id parameters.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{auth::AuthError, Error};

/// Hash a password using Argon2id with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHashError(format!("failed to hash password: {e}")).into())
}

/// Verify a password against a stored hash
///
/// Returns `Ok(false)` for a wrong password and `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        Error::from(AuthError::PasswordHashError(format!(
            "invalid password hash format: {e}"
        )))
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

//! # Password Hashing
//!
//! Password hashing and verification using Argon2.
//!
//! Hashing draws a fresh salt per call, so two hashes of the same plaintext
//! never compare equal. A mismatch during verification is a normal
//! `Ok(false)`, not an error; only an unparseable hash is an error.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Minimum accepted plaintext password length.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long")]
    WeakPassword,

    #[error("Failed to hash password")]
    Hash,

    /// The stored hash is not a valid PHC string.
    #[error("Stored password hash is malformed")]
    InvalidHash,
}

/// Hash a password using the Argon2 algorithm.
pub fn hash_password(password: &str) -> Result<String, Error> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::WeakPassword);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| Error::Hash)?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against an Argon2 hash.
///
/// Returns `Ok(false)` on mismatch. Errors only when `hash` cannot be
/// parsed as an Argon2 PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| Error::InvalidHash)?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

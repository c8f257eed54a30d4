// Password hashing utilities
// Uses bcrypt for salted, cost-adaptive password hashing

use bcrypt::{hash, verify};
use thiserror::Error;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Cost used when none is configured
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes a password using bcrypt
///
/// # Example
/// ```
/// use social_api::auth::password::{hash_password, MIN_COST};
///
/// let hash = hash_password("my_password", MIN_COST).expect("valid hash");
/// assert_ne!(hash, "my_password");
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(hash(password, cost)?)
}

/// Verifies a password against a bcrypt hash
///
/// Returns `Ok(false)` on mismatch and an error only when `hash` is not a
/// usable bcrypt hash.
///
/// # Example
/// ```
/// use social_api::auth::password::{hash_password, verify_password, MIN_COST};
///
/// let hash = hash_password("my_password", MIN_COST).unwrap();
/// assert!(verify_password("my_password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    Ok(verify(password, hash)?)
}

/// [`hash_password`] on the blocking thread pool
pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost)).await?
}

/// [`verify_password`] on the blocking thread pool
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?
}

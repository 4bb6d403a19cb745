use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::shared::error::{AppError, AppResult};

/// Argon2id with a fresh random salt, returned in PHC string form.
/// Runs on the blocking pool.
pub async fn hash_password(plain: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || argon2_hash(&plain))
        .await
        .map_err(|e| AppError::InternalServerError(format!("password hashing task failed: {}", e)))?
}

/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(plain: String, hashed: String) -> bool {
    tokio::task::spawn_blocking(move || argon2_verify(&plain, &hashed))
        .await
        .unwrap_or(false)
}

fn argon2_hash(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalServerError(format!("failed to encrypt password: {}", e)))
}

fn argon2_verify(plain: &str, hashed: &str) -> bool {
    match PasswordHash::new(hashed) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

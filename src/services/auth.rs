use argon2::{
    Argon2, ParamsBuilder,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use deadpool_postgres::Pool;
use zeroize::Zeroize;

use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::repositories::user as user_repo;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 2;

/// Hashes a password using Argon2id.
fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Internal(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Internal(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    Ok(password_hash)
}

/// Verifies a password against a stored hash via the algorithm's own
/// verify primitive.
fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Hash parse error: {}", e)))?;

    let result = Argon2::default()
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok();

    password_bytes.zeroize();
    Ok(result)
}

/// Registers a new user and returns the generated id.
///
/// Email uniqueness is enforced by storage; a duplicate surfaces as a
/// 409 through the central error classification.
pub async fn register_user(
    pool: &Pool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<i64> {
    let password_hash = hash_password(password)?;
    let id = user_repo::create_user(pool, username, email, &password_hash).await?;

    tracing::info!("✅ User registered with id: {}", id);
    Ok(id)
}

/// Authenticates a user by email and password.
///
/// Unknown email and wrong password produce the same error so the
/// response does not reveal which one failed.
pub async fn authenticate_user(pool: &Pool, email: &str, password: &str) -> Result<User> {
    let user = user_repo::find_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

    if !verify_password(password, &user.password)? {
        return Err(AppError::Authentication("Invalid credentials".to_string()));
    }

    tracing::info!("✅ User authenticated: {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(!verify_password("correct horse battery stable", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same password", &a).unwrap());
        assert!(verify_password("same password", &b).unwrap());
    }
}

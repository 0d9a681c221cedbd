use deadpool_postgres::Pool;

use crate::error::Result;
use crate::models::user::{User, UserRecord};

/// Inserts a new user with the given password hash and returns the
/// generated id. The role falls back to the column default.
pub async fn create_user(
    pool: &Pool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
            &[&username, &email, &password_hash],
        )
        .await?;

    Ok(row.get(0))
}

/// Finds a user by email, including the stored password hash.
pub async fn find_by_email(pool: &Pool, email: &str) -> Result<Option<User>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT id, username, email, password, role, created_at
            FROM users
            WHERE email = $1
            "#,
            &[&email],
        )
        .await?;

    Ok(row.as_ref().map(User::from))
}

/// Lists every user without the password hash. The users endpoint is
/// list-only and unpaginated.
pub async fn list_users(pool: &Pool) -> Result<Vec<UserRecord>> {
    let client = pool.get().await?;

    let rows = client
        .query(
            r#"
            SELECT id, username, email, role, created_at
            FROM users
            ORDER BY id
            "#,
            &[],
        )
        .await?;

    Ok(rows.iter().map(UserRecord::from).collect())
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_postgres::Row;

/// Represents a user account as stored, including the password hash.
///
/// Never serialized to clients; the outward projection is [`UserRecord`].
#[derive(Debug, Clone)]
pub struct User {
    /// The unique identifier for the user.
    pub id: i64,
    /// The user's login name.
    pub username: String,
    /// The user's email address (unique).
    pub email: String,
    /// The user's argon2 password hash.
    pub password: String,
    /// The user's role, an open string set ("admin", "employee", ...).
    pub role: String,
    /// The timestamp when the user was created.
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for User {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            password: row.get("password"),
            role: row.get("role"),
            created_at: row.get("created_at"),
        }
    }
}

/// The client-facing projection of a user. No password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for UserRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            role: row.get("role"),
            created_at: row.get("created_at"),
        }
    }
}

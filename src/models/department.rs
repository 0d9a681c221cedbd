use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Represents a department.
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for Department {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            code: row.get("code"),
            name: row.get("name"),
            created_at: row.get("created_at"),
        }
    }
}

/// Partial update for a department; presence signals intent.
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentPatch {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl DepartmentPatch {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none()
    }
}

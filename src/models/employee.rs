use chrono::{DateTime, Utc};
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSql, FromSql)]
#[postgres(name = "employee_status")]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[postgres(name = "active")]
    Active,
    #[postgres(name = "inactive")]
    Inactive,
    #[postgres(name = "terminated")]
    Terminated,
}

/// An employee joined with its department, as returned by list and
/// get-by-id.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub title: String,
    pub status: EmployeeStatus,
    pub department_id: i64,
    pub department_name: String,
    pub department_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for EmployeeRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            title: row.get("title"),
            status: row.get("status"),
            department_id: row.get("department_id"),
            department_name: row.get("department_name"),
            department_code: row.get("department_code"),
            created_at: row.get("created_at"),
        }
    }
}

/// Partial update for an employee. A present field is written; an absent
/// field is left untouched, so empty strings and other falsy values are
/// legitimate new values.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub department_id: Option<i64>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.title.is_none()
            && self.status.is_none()
            && self.department_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_detected() {
        assert!(EmployeePatch::default().is_empty());
        assert!(!EmployeePatch { name: Some(String::new()), ..Default::default() }.is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&EmployeeStatus::Terminated).unwrap();
        assert_eq!(json, "\"terminated\"");
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSql, FromSql)]
#[postgres(name = "leave_type")]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[postgres(name = "annual")]
    Annual,
    #[postgres(name = "sick")]
    Sick,
    #[postgres(name = "unpaid")]
    Unpaid,
    #[postgres(name = "special")]
    Special,
}

/// Workflow state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSql, FromSql)]
#[postgres(name = "leave_status")]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[postgres(name = "pending")]
    Pending,
    #[postgres(name = "approved")]
    Approved,
    #[postgres(name = "rejected")]
    Rejected,
    #[postgres(name = "cancelled")]
    Cancelled,
}

/// A leave request joined with the requesting employee's name.
///
/// `approved_by`/`approved_at` exist in storage but are reserved for a
/// future approval workflow; no endpoint sets them.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Row> for LeaveRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            employee_id: row.get("employee_id"),
            employee_name: row.get("employee_name"),
            start_date: row.get("start_date"),
            end_date: row.get("end_date"),
            leave_type: row.get("type"),
            status: row.get("status"),
            reason: row.get("reason"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

/// Partial update for a leave request.
#[derive(Debug, Default, Deserialize)]
pub struct LeavePatch {
    pub employee_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub leave_type: Option<LeaveType>,
    pub status: Option<LeaveStatus>,
    pub reason: Option<String>,
}

impl LeavePatch {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.leave_type.is_none()
            && self.status.is_none()
            && self.reason.is_none()
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Completion state of an attendance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSql, FromSql)]
#[postgres(name = "attendance_status")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[postgres(name = "incomplete")]
    Incomplete,
    #[postgres(name = "complete")]
    Complete,
}

/// An attendance entry joined with employee and shift names.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub shift_id: i64,
    pub shift_name: String,
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for AttendanceRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            employee_id: row.get("employee_id"),
            employee_name: row.get("employee_name"),
            shift_id: row.get("shift_id"),
            shift_name: row.get("shift_name"),
            work_date: row.get("work_date"),
            clock_in: row.get("clock_in"),
            clock_out: row.get("clock_out"),
            status: row.get("status"),
            created_at: row.get("created_at"),
        }
    }
}

/// Partial update for an attendance entry.
#[derive(Debug, Default, Deserialize)]
pub struct AttendancePatch {
    pub employee_id: Option<i64>,
    pub shift_id: Option<i64>,
    pub work_date: Option<NaiveDate>,
    pub clock_in: Option<NaiveDateTime>,
    pub clock_out: Option<NaiveDateTime>,
    pub status: Option<AttendanceStatus>,
}

impl AttendancePatch {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.shift_id.is_none()
            && self.work_date.is_none()
            && self.clock_in.is_none()
            && self.clock_out.is_none()
            && self.status.is_none()
    }
}

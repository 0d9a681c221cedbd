use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// State of a scheduled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSql, FromSql)]
#[postgres(name = "schedule_status")]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[postgres(name = "scheduled")]
    Scheduled,
    #[postgres(name = "off")]
    Off,
    #[postgres(name = "holiday")]
    Holiday,
}

/// A schedule row joined with employee and shift details, as returned by
/// get-by-id.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub shift_id: i64,
    pub shift_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub work_date: NaiveDate,
    pub status: ScheduleStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Row> for ScheduleRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            employee_id: row.get("employee_id"),
            employee_name: row.get("employee_name"),
            shift_id: row.get("shift_id"),
            shift_name: row.get("shift_name"),
            start_time: row.get("start_time"),
            end_time: row.get("end_time"),
            work_date: row.get("work_date"),
            status: row.get("status"),
            notes: row.get("notes"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

/// One scheduled day inside the date-ranged view.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub shift_name: Option<String>,
}

impl From<&Row> for ScheduleEntry {
    fn from(row: &Row) -> Self {
        Self {
            employee_id: row.get("employee_id"),
            work_date: row.get("work_date"),
            shift_name: row.get("shift_name"),
        }
    }
}

/// An active employee with their scheduled days inside the requested
/// date range; the unit of the schedules view.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSchedules {
    pub employee_id: i64,
    pub name: String,
    pub schedules: Vec<ScheduleEntry>,
}

/// Partial update for a schedule row.
#[derive(Debug, Default, Deserialize)]
pub struct SchedulePatch {
    pub shift_id: Option<i64>,
    pub work_date: Option<NaiveDate>,
    pub status: Option<ScheduleStatus>,
    pub notes: Option<String>,
}

impl SchedulePatch {
    pub fn is_empty(&self) -> bool {
        self.shift_id.is_none()
            && self.work_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

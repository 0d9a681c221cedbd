use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Represents a work shift definition.
#[derive(Debug, Clone, Serialize)]
pub struct Shift {
    pub id: i64,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_minutes: i32,
    pub is_overnight: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for Shift {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            start_time: row.get("start_time"),
            end_time: row.get("end_time"),
            total_minutes: row.get("total_minutes"),
            is_overnight: row.get("is_overnight"),
            created_at: row.get("created_at"),
        }
    }
}

/// Partial update for a shift; presence signals intent, so
/// `is_overnight: false` is a valid new value.
#[derive(Debug, Default, Deserialize)]
pub struct ShiftPatch {
    pub name: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub total_minutes: Option<i32>,
    pub is_overnight: Option<bool>,
}

impl ShiftPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.total_minutes.is_none()
            && self.is_overnight.is_none()
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Represents a company or national holiday.
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub holiday_date: NaiveDate,
    pub is_national: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Row> for Holiday {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            holiday_date: row.get("holiday_date"),
            is_national: row.get("is_national"),
            created_at: row.get("created_at"),
        }
    }
}

/// Partial update for a holiday; presence signals intent, so
/// `is_national: false` is a valid new value.
#[derive(Debug, Default, Deserialize)]
pub struct HolidayPatch {
    pub name: Option<String>,
    pub holiday_date: Option<NaiveDate>,
    pub is_national: Option<bool>,
}

impl HolidayPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.holiday_date.is_none() && self.is_national.is_none()
    }
}

use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::schedule::{
    EmployeeSchedules, ScheduleEntry, SchedulePatch, ScheduleRecord, ScheduleStatus,
};
use crate::pagination::Pagination;

/// Builds the date-ranged schedules view.
///
/// Two read queries, no transaction: active employees are filtered,
/// counted and paginated first (ordered by name), then the schedule rows
/// for exactly those employees within `[start, end]` are fetched and
/// merged per employee in process. Benign skew between the two reads is
/// acceptable for a read-only view.
pub async fn schedules_view(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(Vec<EmployeeSchedules>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "WHERE status = 'active'".to_string();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause.push_str(" AND (name ILIKE $1 OR email ILIKE $1)");
        params.push(&keyword);
    }

    let count_sql = format!("SELECT COUNT(*) FROM employees {}", where_clause);
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let employees_sql = format!(
        r#"
        SELECT id, name
        FROM employees
        {}
        ORDER BY name
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let employee_rows = client.query(employees_sql.as_str(), &params).await?;

    if employee_rows.is_empty() {
        return Ok((Vec::new(), total));
    }

    let employee_ids: Vec<i64> = employee_rows.iter().map(|row| row.get("id")).collect();

    let schedule_rows = client
        .query(
            r#"
            SELECT s.employee_id, s.work_date, sh.name AS shift_name
            FROM schedules s
            LEFT JOIN shifts sh ON sh.id = s.shift_id
            WHERE s.employee_id = ANY($1)
              AND s.work_date BETWEEN $2 AND $3
            ORDER BY s.employee_id, s.work_date
            "#,
            &[&employee_ids, &start, &end],
        )
        .await?;

    let entries: Vec<ScheduleEntry> = schedule_rows.iter().map(ScheduleEntry::from).collect();

    let data = employee_rows
        .iter()
        .map(|row| {
            let employee_id: i64 = row.get("id");
            EmployeeSchedules {
                employee_id,
                name: row.get("name"),
                schedules: entries
                    .iter()
                    .filter(|entry| entry.employee_id == employee_id)
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    Ok((data, total))
}

/// Fetches a schedule row by its primary key, joined with employee and
/// shift details.
pub async fn get_schedule(pool: &Pool, id: i64) -> Result<Option<ScheduleRecord>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT
                s.id,
                e.id AS employee_id,
                e.name AS employee_name,
                sh.id AS shift_id,
                sh.name AS shift_name,
                sh.start_time,
                sh.end_time,
                s.work_date,
                s.status,
                s.notes,
                s.created_at,
                s.updated_at
            FROM schedules s
            JOIN employees e ON s.employee_id = e.id
            JOIN shifts sh ON s.shift_id = sh.id
            WHERE s.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(ScheduleRecord::from))
}

/// Inserts a new schedule row and returns the generated id.
pub async fn create_schedule(
    pool: &Pool,
    employee_id: i64,
    shift_id: i64,
    work_date: NaiveDate,
    status: ScheduleStatus,
    notes: Option<&str>,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO schedules (employee_id, shift_id, work_date, status, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
            &[&employee_id, &shift_id, &work_date, &status, &notes],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update, bumping `updated_at`; returns the number of
/// affected rows.
pub async fn update_schedule(pool: &Pool, id: i64, patch: &SchedulePatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(shift_id) = &patch.shift_id {
        params.push(shift_id);
        sets.push(format!("shift_id = ${}", params.len()));
    }

    if let Some(work_date) = &patch.work_date {
        params.push(work_date);
        sets.push(format!("work_date = ${}", params.len()));
    }

    if let Some(status) = &patch.status {
        params.push(status);
        sets.push(format!("status = ${}", params.len()));
    }

    if let Some(notes) = &patch.notes {
        params.push(notes);
        sets.push(format!("notes = ${}", params.len()));
    }

    sets.push("updated_at = NOW()".to_string());

    let sql = format!(
        "UPDATE schedules SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes a schedule row by id, returning the number of affected rows.
pub async fn delete_schedule(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM schedules WHERE id = $1", &[&id])
        .await?)
}

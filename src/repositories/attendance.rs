use chrono::{NaiveDate, NaiveDateTime};
use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::attendance::{AttendancePatch, AttendanceRecord, AttendanceStatus};
use crate::pagination::Pagination;

/// Lists attendance entries joined with employee and shift names; the
/// search matches the employee name or the work date.
pub async fn list_attendances(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
) -> Result<(Vec<AttendanceRecord>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "";
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause = "WHERE e.name ILIKE $1 OR a.work_date::text ILIKE $1";
        params.push(&keyword);
    }

    let count_sql = format!(
        r#"
        SELECT COUNT(*)
        FROM attendances a
        JOIN employees e ON a.employee_id = e.id
        JOIN shifts s ON a.shift_id = s.id
        {}
        "#,
        where_clause
    );
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let data_sql = format!(
        r#"
        SELECT
            a.id,
            e.id AS employee_id,
            e.name AS employee_name,
            s.id AS shift_id,
            s.name AS shift_name,
            a.work_date,
            a.clock_in,
            a.clock_out,
            a.status,
            a.created_at
        FROM attendances a
        JOIN employees e ON a.employee_id = e.id
        JOIN shifts s ON a.shift_id = s.id
        {}
        ORDER BY a.id
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let rows = client.query(data_sql.as_str(), &params).await?;

    Ok((rows.iter().map(AttendanceRecord::from).collect(), total))
}

/// Fetches an attendance entry by its primary key.
pub async fn get_attendance(pool: &Pool, id: i64) -> Result<Option<AttendanceRecord>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT
                a.id,
                e.id AS employee_id,
                e.name AS employee_name,
                s.id AS shift_id,
                s.name AS shift_name,
                a.work_date,
                a.clock_in,
                a.clock_out,
                a.status,
                a.created_at
            FROM attendances a
            JOIN employees e ON a.employee_id = e.id
            JOIN shifts s ON a.shift_id = s.id
            WHERE a.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(AttendanceRecord::from))
}

/// Inserts a new attendance entry and returns the generated id.
#[allow(clippy::too_many_arguments)]
pub async fn create_attendance(
    pool: &Pool,
    employee_id: i64,
    shift_id: i64,
    work_date: NaiveDate,
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    status: AttendanceStatus,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO attendances (employee_id, shift_id, work_date, clock_in, clock_out, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
            &[&employee_id, &shift_id, &work_date, &clock_in, &clock_out, &status],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update; returns the number of affected rows.
pub async fn update_attendance(pool: &Pool, id: i64, patch: &AttendancePatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(employee_id) = &patch.employee_id {
        params.push(employee_id);
        sets.push(format!("employee_id = ${}", params.len()));
    }

    if let Some(shift_id) = &patch.shift_id {
        params.push(shift_id);
        sets.push(format!("shift_id = ${}", params.len()));
    }

    if let Some(work_date) = &patch.work_date {
        params.push(work_date);
        sets.push(format!("work_date = ${}", params.len()));
    }

    if let Some(clock_in) = &patch.clock_in {
        params.push(clock_in);
        sets.push(format!("clock_in = ${}", params.len()));
    }

    if let Some(clock_out) = &patch.clock_out {
        params.push(clock_out);
        sets.push(format!("clock_out = ${}", params.len()));
    }

    if let Some(status) = &patch.status {
        params.push(status);
        sets.push(format!("status = ${}", params.len()));
    }

    let sql = format!(
        "UPDATE attendances SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes an attendance entry by id, returning the number of affected
/// rows.
pub async fn delete_attendance(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM attendances WHERE id = $1", &[&id])
        .await?)
}

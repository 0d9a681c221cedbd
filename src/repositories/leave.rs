use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::leave::{LeavePatch, LeaveRecord, LeaveStatus, LeaveType};
use crate::pagination::Pagination;

/// Lists leave requests joined with the employee name; the search
/// matches the employee name or the start date.
pub async fn list_leaves(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
) -> Result<(Vec<LeaveRecord>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "";
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause = "WHERE e.name ILIKE $1 OR l.start_date::text ILIKE $1";
        params.push(&keyword);
    }

    let count_sql = format!(
        r#"
        SELECT COUNT(*)
        FROM leaves l
        JOIN employees e ON l.employee_id = e.id
        {}
        "#,
        where_clause
    );
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let data_sql = format!(
        r#"
        SELECT
            l.id,
            e.id AS employee_id,
            e.name AS employee_name,
            l.start_date,
            l.end_date,
            l.type,
            l.status,
            l.reason,
            l.created_at,
            l.updated_at
        FROM leaves l
        JOIN employees e ON l.employee_id = e.id
        {}
        ORDER BY l.id
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let rows = client.query(data_sql.as_str(), &params).await?;

    Ok((rows.iter().map(LeaveRecord::from).collect(), total))
}

/// Fetches a leave request by its primary key.
pub async fn get_leave(pool: &Pool, id: i64) -> Result<Option<LeaveRecord>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT
                l.id,
                e.id AS employee_id,
                e.name AS employee_name,
                l.start_date,
                l.end_date,
                l.type,
                l.status,
                l.reason,
                l.created_at,
                l.updated_at
            FROM leaves l
            JOIN employees e ON l.employee_id = e.id
            WHERE l.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(LeaveRecord::from))
}

/// Inserts a new leave request and returns the generated id.
pub async fn create_leave(
    pool: &Pool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    leave_type: LeaveType,
    status: LeaveStatus,
    reason: &str,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO leaves (employee_id, start_date, end_date, type, status, reason)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
            &[&employee_id, &start_date, &end_date, &leave_type, &status, &reason],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update, bumping `updated_at`; returns the number of
/// affected rows.
pub async fn update_leave(pool: &Pool, id: i64, patch: &LeavePatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(employee_id) = &patch.employee_id {
        params.push(employee_id);
        sets.push(format!("employee_id = ${}", params.len()));
    }

    if let Some(start_date) = &patch.start_date {
        params.push(start_date);
        sets.push(format!("start_date = ${}", params.len()));
    }

    if let Some(end_date) = &patch.end_date {
        params.push(end_date);
        sets.push(format!("end_date = ${}", params.len()));
    }

    if let Some(leave_type) = &patch.leave_type {
        params.push(leave_type);
        sets.push(format!("type = ${}", params.len()));
    }

    if let Some(status) = &patch.status {
        params.push(status);
        sets.push(format!("status = ${}", params.len()));
    }

    if let Some(reason) = &patch.reason {
        params.push(reason);
        sets.push(format!("reason = ${}", params.len()));
    }

    sets.push("updated_at = NOW()".to_string());

    let sql = format!(
        "UPDATE leaves SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes a leave request by id, returning the number of affected rows.
pub async fn delete_leave(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM leaves WHERE id = $1", &[&id])
        .await?)
}

use chrono::NaiveTime;
use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::shift::{Shift, ShiftPatch};
use crate::pagination::Pagination;

/// Lists shifts with an optional search over the shift name.
pub async fn list_shifts(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
) -> Result<(Vec<Shift>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "";
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause = "WHERE s.name ILIKE $1";
        params.push(&keyword);
    }

    let count_sql = format!("SELECT COUNT(*) FROM shifts s {}", where_clause);
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let data_sql = format!(
        r#"
        SELECT s.id, s.name, s.start_time, s.end_time, s.total_minutes, s.is_overnight, s.created_at
        FROM shifts s
        {}
        ORDER BY s.id
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let rows = client.query(data_sql.as_str(), &params).await?;

    Ok((rows.iter().map(Shift::from).collect(), total))
}

/// Fetches a shift by its primary key.
pub async fn get_shift(pool: &Pool, id: i64) -> Result<Option<Shift>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT s.id, s.name, s.start_time, s.end_time, s.total_minutes, s.is_overnight, s.created_at
            FROM shifts s
            WHERE s.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(Shift::from))
}

/// Inserts a new shift and returns the generated id.
pub async fn create_shift(
    pool: &Pool,
    name: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
    total_minutes: i32,
    is_overnight: bool,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO shifts (name, start_time, end_time, total_minutes, is_overnight)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
            &[&name, &start_time, &end_time, &total_minutes, &is_overnight],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update; returns the number of affected rows.
pub async fn update_shift(pool: &Pool, id: i64, patch: &ShiftPatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(name) = &patch.name {
        params.push(name);
        sets.push(format!("name = ${}", params.len()));
    }

    if let Some(start_time) = &patch.start_time {
        params.push(start_time);
        sets.push(format!("start_time = ${}", params.len()));
    }

    if let Some(end_time) = &patch.end_time {
        params.push(end_time);
        sets.push(format!("end_time = ${}", params.len()));
    }

    if let Some(total_minutes) = &patch.total_minutes {
        params.push(total_minutes);
        sets.push(format!("total_minutes = ${}", params.len()));
    }

    if let Some(is_overnight) = &patch.is_overnight {
        params.push(is_overnight);
        sets.push(format!("is_overnight = ${}", params.len()));
    }

    let sql = format!(
        "UPDATE shifts SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes a shift by id, returning the number of affected rows.
pub async fn delete_shift(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM shifts WHERE id = $1", &[&id])
        .await?)
}

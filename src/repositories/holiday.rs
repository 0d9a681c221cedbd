use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::holiday::{Holiday, HolidayPatch};
use crate::pagination::Pagination;

/// Lists holidays with an optional search over the holiday name.
pub async fn list_holidays(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
) -> Result<(Vec<Holiday>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "";
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause = "WHERE h.name ILIKE $1";
        params.push(&keyword);
    }

    let count_sql = format!("SELECT COUNT(*) FROM holidays h {}", where_clause);
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let data_sql = format!(
        r#"
        SELECT h.id, h.name, h.holiday_date, h.is_national, h.created_at
        FROM holidays h
        {}
        ORDER BY h.id
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let rows = client.query(data_sql.as_str(), &params).await?;

    Ok((rows.iter().map(Holiday::from).collect(), total))
}

/// Fetches a holiday by its primary key.
pub async fn get_holiday(pool: &Pool, id: i64) -> Result<Option<Holiday>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT h.id, h.name, h.holiday_date, h.is_national, h.created_at
            FROM holidays h
            WHERE h.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(Holiday::from))
}

/// Inserts a new holiday and returns the generated id.
pub async fn create_holiday(
    pool: &Pool,
    name: &str,
    holiday_date: NaiveDate,
    is_national: bool,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO holidays (name, holiday_date, is_national)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
            &[&name, &holiday_date, &is_national],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update; returns the number of affected rows.
pub async fn update_holiday(pool: &Pool, id: i64, patch: &HolidayPatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(name) = &patch.name {
        params.push(name);
        sets.push(format!("name = ${}", params.len()));
    }

    if let Some(holiday_date) = &patch.holiday_date {
        params.push(holiday_date);
        sets.push(format!("holiday_date = ${}", params.len()));
    }

    if let Some(is_national) = &patch.is_national {
        params.push(is_national);
        sets.push(format!("is_national = ${}", params.len()));
    }

    let sql = format!(
        "UPDATE holidays SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes a holiday by id, returning the number of affected rows.
pub async fn delete_holiday(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM holidays WHERE id = $1", &[&id])
        .await?)
}

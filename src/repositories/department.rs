use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::department::{Department, DepartmentPatch};
use crate::pagination::Pagination;

/// Lists departments with an optional search over code and name; the
/// COUNT query shares the WHERE clause and parameters of the data query.
pub async fn list_departments(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
) -> Result<(Vec<Department>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "";
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause = "WHERE d.code ILIKE $1 OR d.name ILIKE $1";
        params.push(&keyword);
    }

    let count_sql = format!("SELECT COUNT(*) FROM departments d {}", where_clause);
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let data_sql = format!(
        r#"
        SELECT d.id, d.code, d.name, d.created_at
        FROM departments d
        {}
        ORDER BY d.id
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let rows = client.query(data_sql.as_str(), &params).await?;

    Ok((rows.iter().map(Department::from).collect(), total))
}

/// Fetches a department by its primary key.
pub async fn get_department(pool: &Pool, id: i64) -> Result<Option<Department>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT d.id, d.code, d.name, d.created_at
            FROM departments d
            WHERE d.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(Department::from))
}

/// Inserts a new department and returns the generated id.
pub async fn create_department(pool: &Pool, code: &str, name: &str) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            "INSERT INTO departments (code, name) VALUES ($1, $2) RETURNING id",
            &[&code, &name],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update; returns the number of affected rows.
pub async fn update_department(pool: &Pool, id: i64, patch: &DepartmentPatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(code) = &patch.code {
        params.push(code);
        sets.push(format!("code = ${}", params.len()));
    }

    if let Some(name) = &patch.name {
        params.push(name);
        sets.push(format!("name = ${}", params.len()));
    }

    let sql = format!(
        "UPDATE departments SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes a department by id, returning the number of affected rows.
pub async fn delete_department(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM departments WHERE id = $1", &[&id])
        .await?)
}

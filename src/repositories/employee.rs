use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;

use crate::error::Result;
use crate::models::employee::{EmployeePatch, EmployeeRecord, EmployeeStatus};
use crate::pagination::Pagination;

/// Lists employees joined with their department, with an optional
/// case-insensitive search over name and email.
///
/// The COUNT query reuses the same WHERE clause and bound parameters as
/// the data query so `meta.total` stays consistent with the returned page.
pub async fn list_employees(
    pool: &Pool,
    pagination: &Pagination,
    search: &str,
) -> Result<(Vec<EmployeeRecord>, i64)> {
    let client = pool.get().await?;

    let keyword = format!("%{}%", search);
    let mut where_clause = "";
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if !search.is_empty() {
        where_clause = "WHERE e.name ILIKE $1 OR e.email ILIKE $1";
        params.push(&keyword);
    }

    let count_sql = format!(
        r#"
        SELECT COUNT(*)
        FROM employees e
        JOIN departments d ON e.department_id = d.id
        {}
        "#,
        where_clause
    );
    let total: i64 = client.query_one(count_sql.as_str(), &params).await?.get(0);

    let data_sql = format!(
        r#"
        SELECT
            e.id,
            e.name,
            e.email,
            e.title,
            e.status,
            d.id AS department_id,
            d.name AS department_name,
            d.code AS department_code,
            e.created_at
        FROM employees e
        JOIN departments d ON e.department_id = d.id
        {}
        ORDER BY e.id
        LIMIT ${} OFFSET ${}
        "#,
        where_clause,
        params.len() + 1,
        params.len() + 2
    );
    params.push(&pagination.limit);
    params.push(&pagination.offset);

    let rows = client.query(data_sql.as_str(), &params).await?;

    Ok((rows.iter().map(EmployeeRecord::from).collect(), total))
}

/// Fetches a single employee by its primary key.
pub async fn get_employee(pool: &Pool, id: i64) -> Result<Option<EmployeeRecord>> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            r#"
            SELECT
                e.id,
                e.name,
                e.email,
                e.title,
                e.status,
                d.id AS department_id,
                d.name AS department_name,
                d.code AS department_code,
                e.created_at
            FROM employees e
            JOIN departments d ON e.department_id = d.id
            WHERE e.id = $1
            LIMIT 1
            "#,
            &[&id],
        )
        .await?;

    Ok(row.as_ref().map(EmployeeRecord::from))
}

/// Inserts a new employee and returns the generated id.
pub async fn create_employee(
    pool: &Pool,
    name: &str,
    email: &str,
    title: &str,
    status: EmployeeStatus,
    department_id: i64,
) -> Result<i64> {
    let client = pool.get().await?;

    let row = client
        .query_one(
            r#"
            INSERT INTO employees (name, email, title, status, department_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
            &[&name, &email, &title, &status, &department_id],
        )
        .await?;

    Ok(row.get(0))
}

/// Applies a partial update, writing only the fields present in the
/// patch. Returns the number of affected rows.
pub async fn update_employee(pool: &Pool, id: i64, patch: &EmployeePatch) -> Result<u64> {
    let client = pool.get().await?;

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(name) = &patch.name {
        params.push(name);
        sets.push(format!("name = ${}", params.len()));
    }

    if let Some(email) = &patch.email {
        params.push(email);
        sets.push(format!("email = ${}", params.len()));
    }

    if let Some(title) = &patch.title {
        params.push(title);
        sets.push(format!("title = ${}", params.len()));
    }

    if let Some(status) = &patch.status {
        params.push(status);
        sets.push(format!("status = ${}", params.len()));
    }

    if let Some(department_id) = &patch.department_id {
        params.push(department_id);
        sets.push(format!("department_id = ${}", params.len()));
    }

    let sql = format!(
        "UPDATE employees SET {} WHERE id = ${}",
        sets.join(", "),
        params.len() + 1
    );
    params.push(&id);

    Ok(client.execute(sql.as_str(), &params).await?)
}

/// Deletes an employee by id, returning the number of affected rows.
pub async fn delete_employee(pool: &Pool, id: i64) -> Result<u64> {
    let client = pool.get().await?;

    Ok(client
        .execute("DELETE FROM employees WHERE id = $1", &[&id])
        .await?)
}

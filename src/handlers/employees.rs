use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::employee::{EmployeePatch, EmployeeStatus},
    pagination::{self, ListQuery, Meta, Paginated},
    repositories::employee as employee_repo,
    state::AppState,
    validation::params::parse_id,
};

/// The request payload for creating an employee.
///
/// Fields are optional at the type level so a missing field produces the
/// aggregate validation error instead of a deserialization rejection.
#[derive(Deserialize, Debug)]
pub struct CreateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub department_id: Option<i64>,
}

/// Lists employees with pagination and optional name/email search.
#[axum::debug_handler]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) = employee_repo::list_employees(&state.db, &pagination, search).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one employee by id.
#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "employee")?;

    let employee = employee_repo::get_employee(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    Ok(Json(employee).into_response())
}

/// Creates an employee.
#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Response> {
    let (Some(name), Some(email), Some(title), Some(status), Some(department_id)) =
        (req.name, req.email, req.title, req.status, req.department_id)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if name.trim().is_empty() || email.trim().is_empty() || title.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let id =
        employee_repo::create_employee(&state.db, &name, &email, &title, status, department_id)
            .await?;

    tracing::info!("✅ Employee created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Employee created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates an employee; only fields present in the body are
/// written.
#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Response> {
    let id = parse_id(&id, "employee")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = employee_repo::update_employee(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Employee updated successfully" })).into_response())
}

/// Deletes an employee by id.
#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "employee")?;

    let affected = employee_repo::delete_employee(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Employee deleted successfully" })).into_response())
}

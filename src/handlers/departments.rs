use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::department::DepartmentPatch,
    pagination::{self, ListQuery, Meta, Paginated},
    repositories::department as department_repo,
    state::AppState,
    validation::params::parse_id,
};

/// The request payload for creating a department.
#[derive(Deserialize, Debug)]
pub struct CreateDepartmentRequest {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Lists departments with pagination and optional code/name search.
#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) = department_repo::list_departments(&state.db, &pagination, search).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one department by id.
#[axum::debug_handler]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "department")?;

    let department = department_repo::get_department(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

    Ok(Json(department).into_response())
}

/// Creates a department.
#[axum::debug_handler]
pub async fn create_department(
    State(state): State<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Response> {
    let (Some(code), Some(name)) = (req.code, req.name) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if code.trim().is_empty() || name.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let id = department_repo::create_department(&state.db, &code, &name).await?;

    tracing::info!("✅ Department created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Department created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates a department.
#[axum::debug_handler]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<DepartmentPatch>,
) -> Result<Response> {
    let id = parse_id(&id, "department")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = department_repo::update_department(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Department not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Department updated successfully" })).into_response())
}

/// Deletes a department by id.
#[axum::debug_handler]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "department")?;

    let affected = department_repo::delete_department(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Department not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Department deleted successfully" })).into_response())
}

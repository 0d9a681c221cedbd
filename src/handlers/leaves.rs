use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::leave::{LeavePatch, LeaveStatus, LeaveType},
    pagination::{self, ListQuery, Meta, Paginated},
    repositories::leave as leave_repo,
    state::AppState,
    validation::params::parse_id,
};

/// The request payload for creating a leave request.
#[derive(Deserialize, Debug)]
pub struct CreateLeaveRequest {
    pub employee_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub leave_type: Option<LeaveType>,
    pub status: Option<LeaveStatus>,
    pub reason: Option<String>,
}

/// Lists leave requests with pagination; the search matches the employee
/// name or the start date.
#[axum::debug_handler]
pub async fn list_leaves(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) = leave_repo::list_leaves(&state.db, &pagination, search).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one leave request by id.
#[axum::debug_handler]
pub async fn get_leave(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "leave")?;

    let leave = leave_repo::get_leave(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Leave not found".to_string()))?;

    Ok(Json(leave).into_response())
}

/// Creates a leave request.
#[axum::debug_handler]
pub async fn create_leave(
    State(state): State<AppState>,
    Json(req): Json<CreateLeaveRequest>,
) -> Result<Response> {
    let (
        Some(employee_id),
        Some(start_date),
        Some(end_date),
        Some(leave_type),
        Some(status),
        Some(reason),
    ) = (
        req.employee_id,
        req.start_date,
        req.end_date,
        req.leave_type,
        req.status,
        req.reason,
    )
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if reason.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let id = leave_repo::create_leave(
        &state.db,
        employee_id,
        start_date,
        end_date,
        leave_type,
        status,
        &reason,
    )
    .await?;

    tracing::info!("✅ Leave created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Leave created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates a leave request.
#[axum::debug_handler]
pub async fn update_leave(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LeavePatch>,
) -> Result<Response> {
    let id = parse_id(&id, "leave")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = leave_repo::update_leave(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Leave not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Leave updated successfully" })).into_response())
}

/// Deletes a leave request by id.
#[axum::debug_handler]
pub async fn delete_leave(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "leave")?;

    let affected = leave_repo::delete_leave(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Leave not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Leave deleted successfully" })).into_response())
}

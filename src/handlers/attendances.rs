use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::attendance::{AttendancePatch, AttendanceStatus},
    pagination::{self, ListQuery, Meta, Paginated},
    repositories::attendance as attendance_repo,
    state::AppState,
    validation::params::parse_id,
};

/// The request payload for creating an attendance entry.
#[derive(Deserialize, Debug)]
pub struct CreateAttendanceRequest {
    pub employee_id: Option<i64>,
    pub shift_id: Option<i64>,
    pub work_date: Option<NaiveDate>,
    pub clock_in: Option<NaiveDateTime>,
    pub clock_out: Option<NaiveDateTime>,
    pub status: Option<AttendanceStatus>,
}

/// Lists attendance entries with pagination; the search matches the
/// employee name or the work date.
#[axum::debug_handler]
pub async fn list_attendances(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) = attendance_repo::list_attendances(&state.db, &pagination, search).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one attendance entry by id.
#[axum::debug_handler]
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "attendance")?;

    let attendance = attendance_repo::get_attendance(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Attendance not found".to_string()))?;

    Ok(Json(attendance).into_response())
}

/// Creates an attendance entry.
#[axum::debug_handler]
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(req): Json<CreateAttendanceRequest>,
) -> Result<Response> {
    let (
        Some(employee_id),
        Some(shift_id),
        Some(work_date),
        Some(clock_in),
        Some(clock_out),
        Some(status),
    ) = (
        req.employee_id,
        req.shift_id,
        req.work_date,
        req.clock_in,
        req.clock_out,
        req.status,
    )
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let id = attendance_repo::create_attendance(
        &state.db,
        employee_id,
        shift_id,
        work_date,
        clock_in,
        clock_out,
        status,
    )
    .await?;

    tracing::info!("✅ Attendance created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Attendance created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates an attendance entry.
#[axum::debug_handler]
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<AttendancePatch>,
) -> Result<Response> {
    let id = parse_id(&id, "attendance")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = attendance_repo::update_attendance(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Attendance not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Attendance updated successfully" })).into_response())
}

/// Deletes an attendance entry by id.
#[axum::debug_handler]
pub async fn delete_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "attendance")?;

    let affected = attendance_repo::delete_attendance(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Attendance not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Attendance deleted successfully" })).into_response())
}

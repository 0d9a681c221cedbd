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
    models::schedule::{SchedulePatch, ScheduleStatus},
    pagination::{self, Meta, Paginated},
    repositories::schedule as schedule_repo,
    state::AppState,
    validation::params::parse_id,
};

/// Query parameters for the date-ranged schedules view.
#[derive(Deserialize, Debug)]
pub struct ScheduleViewQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// The request payload for creating a schedule row. `status` defaults to
/// `scheduled` and `notes` may be omitted.
#[derive(Deserialize, Debug)]
pub struct CreateScheduleRequest {
    pub employee_id: Option<i64>,
    pub shift_id: Option<i64>,
    pub work_date: Option<NaiveDate>,
    pub status: Option<ScheduleStatus>,
    pub notes: Option<String>,
}

fn parse_range_date(raw: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} date", field)))
}

/// The schedules view: active employees (paginated, searchable, ordered
/// by name) with their scheduled days inside the required `[start, end]`
/// range.
#[axum::debug_handler]
pub async fn schedules_view(
    State(state): State<AppState>,
    Query(query): Query<ScheduleViewQuery>,
) -> Result<Response> {
    let (Some(start), Some(end)) = (query.start, query.end) else {
        return Err(AppError::Validation(
            "start and end date are required".to_string(),
        ));
    };

    let start = parse_range_date(&start, "start")?;
    let end = parse_range_date(&end, "end")?;

    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) =
        schedule_repo::schedules_view(&state.db, &pagination, search, start, end).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one schedule row by id, joined with employee and shift
/// details.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "schedule")?;

    let schedule = schedule_repo::get_schedule(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;

    Ok(Json(schedule).into_response())
}

/// Creates a schedule row.
#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<Response> {
    let (Some(employee_id), Some(shift_id), Some(work_date)) =
        (req.employee_id, req.shift_id, req.work_date)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let status = req.status.unwrap_or(ScheduleStatus::Scheduled);

    let id = schedule_repo::create_schedule(
        &state.db,
        employee_id,
        shift_id,
        work_date,
        status,
        req.notes.as_deref(),
    )
    .await?;

    tracing::info!("✅ Schedule created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Schedule created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates a schedule row.
#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<SchedulePatch>,
) -> Result<Response> {
    let id = parse_id(&id, "schedule")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = schedule_repo::update_schedule(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Schedule not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Schedule updated successfully" })).into_response())
}

/// Deletes a schedule row by id.
#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "schedule")?;

    let affected = schedule_repo::delete_schedule(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Schedule not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Schedule deleted successfully" })).into_response())
}

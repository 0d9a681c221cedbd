use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveTime;
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::shift::ShiftPatch,
    pagination::{self, ListQuery, Meta, Paginated},
    repositories::shift as shift_repo,
    state::AppState,
    validation::params::parse_id,
};

/// The request payload for creating a shift.
#[derive(Deserialize, Debug)]
pub struct CreateShiftRequest {
    pub name: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub total_minutes: Option<i32>,
    pub is_overnight: Option<bool>,
}

/// Lists shifts with pagination and optional name search.
#[axum::debug_handler]
pub async fn list_shifts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) = shift_repo::list_shifts(&state.db, &pagination, search).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one shift by id.
#[axum::debug_handler]
pub async fn get_shift(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "shift")?;

    let shift = shift_repo::get_shift(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

    Ok(Json(shift).into_response())
}

/// Creates a shift. `is_overnight: false` is a valid value; presence is
/// what is required.
#[axum::debug_handler]
pub async fn create_shift(
    State(state): State<AppState>,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Response> {
    let (Some(name), Some(start_time), Some(end_time), Some(total_minutes), Some(is_overnight)) = (
        req.name,
        req.start_time,
        req.end_time,
        req.total_minutes,
        req.is_overnight,
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if name.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let id = shift_repo::create_shift(
        &state.db,
        &name,
        start_time,
        end_time,
        total_minutes,
        is_overnight,
    )
    .await?;

    tracing::info!("✅ Shift created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Shift created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates a shift.
#[axum::debug_handler]
pub async fn update_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ShiftPatch>,
) -> Result<Response> {
    let id = parse_id(&id, "shift")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = shift_repo::update_shift(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Shift not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Shift updated successfully" })).into_response())
}

/// Deletes a shift by id.
#[axum::debug_handler]
pub async fn delete_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "shift")?;

    let affected = shift_repo::delete_shift(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Shift not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Shift deleted successfully" })).into_response())
}

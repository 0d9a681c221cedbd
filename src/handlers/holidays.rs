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
    models::holiday::HolidayPatch,
    pagination::{self, ListQuery, Meta, Paginated},
    repositories::holiday as holiday_repo,
    state::AppState,
    validation::params::parse_id,
};

/// The request payload for creating a holiday.
#[derive(Deserialize, Debug)]
pub struct CreateHolidayRequest {
    pub name: Option<String>,
    pub holiday_date: Option<NaiveDate>,
    pub is_national: Option<bool>,
}

/// Lists holidays with pagination and optional name search.
#[axum::debug_handler]
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let pagination = pagination::get_pagination(query.page.as_deref(), query.limit.as_deref());
    let search = query.search.as_deref().unwrap_or("");

    let (data, total) = holiday_repo::list_holidays(&state.db, &pagination, search).await?;

    Ok(Json(Paginated {
        data,
        meta: Meta::new(&pagination, total),
    })
    .into_response())
}

/// Fetches one holiday by id.
#[axum::debug_handler]
pub async fn get_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "holiday")?;

    let holiday = holiday_repo::get_holiday(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Holiday not found".to_string()))?;

    Ok(Json(holiday).into_response())
}

/// Creates a holiday. `is_national: false` is a valid value; presence is
/// what is required.
#[axum::debug_handler]
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(req): Json<CreateHolidayRequest>,
) -> Result<Response> {
    let (Some(name), Some(holiday_date), Some(is_national)) =
        (req.name, req.holiday_date, req.is_national)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if name.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let id = holiday_repo::create_holiday(&state.db, &name, holiday_date, is_national).await?;

    tracing::info!("✅ Holiday created with id: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "Holiday created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Partially updates a holiday.
#[axum::debug_handler]
pub async fn update_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<HolidayPatch>,
) -> Result<Response> {
    let id = parse_id(&id, "holiday")?;

    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let affected = holiday_repo::update_holiday(&state.db, id, &patch).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Holiday not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Holiday updated successfully" })).into_response())
}

/// Deletes a holiday by id.
#[axum::debug_handler]
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, "holiday")?;

    let affected = holiday_repo::delete_holiday(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Holiday not found".to_string()));
    }

    Ok(Json(sonic_rs::json!({ "message": "Holiday deleted successfully" })).into_response())
}

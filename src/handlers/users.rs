use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{error::Result, repositories::user as user_repo, state::AppState};

/// Lists every user. List-only and unpaginated; the projection never
/// includes the password hash.
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Response> {
    let users = user_repo::list_users(&state.db).await?;

    Ok(Json(users).into_response())
}

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    middleware_layer::auth::AuthUser,
    services::{auth as auth_service, token},
    state::AppState,
    validation::auth::*,
};

/// The request payload for user registration.
#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The request payload for user login.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The response payload for a successful login.
#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// The user subset echoed back at login.
#[derive(Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Handles user registration.
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response> {
    let (Some(username), Some(email), Some(password)) =
        (payload.username, payload.email, payload.password)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    validate_username(&username)?;
    validate_email(&email)?;
    validate_password(&password)?;

    tracing::debug!("Register attempt for: {}", email);

    let id = auth_service::register_user(&state.db, &username, &email, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(sonic_rs::json!({
            "message": "User registered successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// Handles user login, issuing a signed access token.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    tracing::debug!("Login attempt for: {}", email);

    let user = auth_service::authenticate_user(&state.db, &email, &password).await?;

    let token = token::issue_token(
        user.id,
        &user.role,
        state.config.jwt_secret.as_bytes(),
        Duration::hours(state.config.jwt_expires_hours),
    )?;

    tracing::info!("✅ User logged in: {}", user.id);

    Ok(Json(LoginResponse {
        token,
        user: LoginUser {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    })
    .into_response())
}

/// Echoes the verified claims attached by the authentication middleware.
#[axum::debug_handler]
pub async fn profile(Extension(user): Extension<AuthUser>) -> Response {
    Json(sonic_rs::json!({
        "id": user.id,
        "role": user.role,
    }))
    .into_response()
}

/// An admin-only probe route; reaching it proves the whole chain.
#[axum::debug_handler]
pub async fn admin() -> Response {
    Json(sonic_rs::json!({ "message": "Admin route" })).into_response()
}

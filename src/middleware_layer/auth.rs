use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, services::token, state::AppState};

/// Authenticated identity extracted from a verified token and attached
/// to the request for downstream handlers.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub role: String,
}

/// Extracts the bearer token from the standard authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// A middleware that requires a valid bearer token.
///
/// Verification completes before any downstream handler runs; on any
/// failure the pipeline halts with a 401 and a reason-specific message.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Authentication("Missing authorization token".to_string()))?
        .to_string();

    let claims = token::verify_token(&token, state.config.jwt_secret.as_bytes())
        .map_err(|err| AppError::Authentication(err.to_string()))?;

    request.extensions_mut().insert(AuthUser {
        id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

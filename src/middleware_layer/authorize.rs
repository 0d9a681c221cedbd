use axum::{extract::Request, middleware::Next, response::Response};

use crate::{error::AppError, middleware_layer::auth::AuthUser};

/// A middleware that requires the authenticated identity's role to be in
/// `allowed`.
///
/// Must run after `require_auth` in the chain. If no identity was
/// attached (misconfigured route ordering) it fails closed with a 401
/// instead of letting the request through.
pub async fn authorize(
    request: Request,
    next: Next,
    allowed: &'static [&'static str],
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::Authentication("Authentication required".to_string()))?;

    if !allowed.contains(&user.role.as_str()) {
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}

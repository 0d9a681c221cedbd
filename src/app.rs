use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use http::{Method, header};
use tower_governor::governor::GovernorConfigBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{handlers, middleware_layer, state::AppState};

/// Roles allowed through the admin gate.
const ADMIN_ROLES: &[&str] = &["admin"];

/// Assembles the full application router.
///
/// Route gating mirrors the API surface: credential endpoints are public
/// but rate limited, `/api/auth/profile` requires authentication,
/// `/api/auth/admin` additionally requires the admin role, and resource
/// routes are public.
pub fn router(state: AppState) -> Router {
    let credential_governor = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(20)
            .use_headers()
            .finish()
            .unwrap(),
    );

    let credential_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .layer(tower_governor::GovernorLayer::new(credential_governor))
        .with_state(state.clone());

    let profile_routes = Router::new()
        .route("/api/auth/profile", get(handlers::auth::profile))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state.clone());

    // Layer order matters: the authentication layer is added last so it
    // runs first and the role check always sees a verified identity.
    let admin_routes = Router::new()
        .route("/api/auth/admin", get(handlers::auth::admin))
        .route_layer(from_fn(
            |request: axum::extract::Request, next: axum::middleware::Next| {
                middleware_layer::authorize::authorize(request, next, ADMIN_ROLES)
            },
        ))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state.clone());

    let resource_routes = Router::new()
        .route("/api/users", get(handlers::users::list_users))
        .route(
            "/api/employees",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route(
            "/api/employees/{id}",
            get(handlers::employees::get_employee)
                .patch(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        )
        .route(
            "/api/departments",
            get(handlers::departments::list_departments)
                .post(handlers::departments::create_department),
        )
        .route(
            "/api/departments/{id}",
            get(handlers::departments::get_department)
                .patch(handlers::departments::update_department)
                .delete(handlers::departments::delete_department),
        )
        .route(
            "/api/shifts",
            get(handlers::shifts::list_shifts).post(handlers::shifts::create_shift),
        )
        .route(
            "/api/shifts/{id}",
            get(handlers::shifts::get_shift)
                .patch(handlers::shifts::update_shift)
                .delete(handlers::shifts::delete_shift),
        )
        .route(
            "/api/attendances",
            get(handlers::attendances::list_attendances)
                .post(handlers::attendances::create_attendance),
        )
        .route(
            "/api/attendances/{id}",
            get(handlers::attendances::get_attendance)
                .patch(handlers::attendances::update_attendance)
                .delete(handlers::attendances::delete_attendance),
        )
        .route(
            "/api/leaves",
            get(handlers::leaves::list_leaves).post(handlers::leaves::create_leave),
        )
        .route(
            "/api/leaves/{id}",
            get(handlers::leaves::get_leave)
                .patch(handlers::leaves::update_leave)
                .delete(handlers::leaves::delete_leave),
        )
        .route(
            "/api/schedules",
            get(handlers::schedules::schedules_view).post(handlers::schedules::create_schedule),
        )
        .route(
            "/api/schedules/{id}",
            get(handlers::schedules::get_schedule)
                .patch(handlers::schedules::update_schedule)
                .delete(handlers::schedules::delete_schedule),
        )
        .route(
            "/api/holidays",
            get(handlers::holidays::list_holidays).post(handlers::holidays::create_holiday),
        )
        .route(
            "/api/holidays/{id}",
            get(handlers::holidays::get_holiday)
                .patch(handlers::holidays::update_holiday)
                .delete(handlers::holidays::delete_holiday),
        )
        .with_state(state.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(credential_routes)
        .merge(profile_routes)
        .merge(admin_routes)
        .merge(resource_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(cors)
}

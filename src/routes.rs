// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{career, stats, subject},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Body cap for subject resolution: 2000 catalog rows plus 500 keys.
pub const SUBJECT_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Body cap for dashboard snapshots: 5000 quizzes plus 100 000 attempts.
pub const STATS_BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Assembles the main application router.
///
/// * Merges all sub-routers (careers, subjects, admin).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (config and pathway tables).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let career_routes = Router::new()
        .route("/", get(career::list_careers))
        .route("/{id}", get(career::get_career))
        .route("/{id}/subjects", post(career::career_subjects))
        .layer(DefaultBodyLimit::max(SUBJECT_BODY_LIMIT));

    let subject_routes = Router::new()
        .route("/resolve", post(subject::resolve_subjects))
        .layer(DefaultBodyLimit::max(SUBJECT_BODY_LIMIT));

    let admin_routes = Router::new()
        .route("/stats", post(stats::quiz_stats))
        .layer(DefaultBodyLimit::max(STATS_BODY_LIMIT))
        // Auth first, then Admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/careers", career_routes)
        .nest("/api/subjects", subject_routes)
        .nest("/api/admin", admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

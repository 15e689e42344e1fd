//! persons-api library - HTTP service for the persons resource
//!
//! Thin CRUD plumbing around the persons-common domain: an axum router over
//! a SQLite-backed repository, seeded from a CSV file at startup.

use axum::Router;
use sqlx::SqlitePool;

pub mod api;
pub mod db;
pub mod error;
pub mod seed;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/persons",
            get(api::persons::list_persons).post(api::persons::create_person),
        )
        .route("/persons/:id", get(api::persons::get_person))
        .route("/persons/color/:color", get(api::persons::get_persons_by_colour))
        .merge(api::health::health_routes())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

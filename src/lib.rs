// src/lib.rs

//! plotify-api: read-only reporting backend that pivots student attribute
//! counts per teacher into chart-ready tables.

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod chart;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pivot;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Build the application router.
///
/// When `static_dir` is given, `/` serves its `index.html` and `/dist/*` the
/// bundled front-end under `<static_dir>/dist`.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    // Very permissive CORS for local dev
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        // health
        .route("/health", get(routes::health::health))
        // reporting
        .route("/api/attributes", get(routes::attributes::list_attributes))
        .route("/api/chart", post(routes::chart::get_chart));

    if let Some(dir) = static_dir {
        app = app
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .nest_service("/dist", ServeDir::new(dir.join("dist")));
    }

    app.with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

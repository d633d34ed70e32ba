// src/routes/health.rs

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::query_scalar;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// 503 when the database does not answer a trivial query.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResp>) {
    let reachable = query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .map_err(|e| tracing::warn!(error = %e, "health check: database unreachable"))
        .is_ok();

    let (code, status, database) = if reachable {
        (StatusCode::OK, "ok", "reachable")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
    };
    (code, Json(HealthResp { status, version: env!("CARGO_PKG_VERSION"), database }))
}

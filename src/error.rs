// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pivot::PivotError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("data source error: {0}")]
    DataSource(#[from] sqlx::Error),
    #[error(transparent)]
    Pivot(#[from] PivotError),
}

// Details stay in the log; clients only ever see a generic failure.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

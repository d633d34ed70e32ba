// src/routes/attributes.rs

use axum::{extract::State, Json};

use crate::{AppState, db::ReportQueries, error::AppResult, models::AttributeList};

// GET /api/attributes
pub async fn list_attributes(State(state): State<AppState>) -> AppResult<Json<AttributeList>> {
    let mut db = ReportQueries::acquire(&state.pool).await?;
    let values = db.list_attribute_values(None).await?;
    Ok(Json(values.into()))
}

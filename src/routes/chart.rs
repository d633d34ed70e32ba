// src/routes/chart.rs

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request, State},
    http::header,
    Form, Json,
};
use serde::Deserialize;

use crate::{
    AppState,
    chart::{assemble_chart, ChartPayload},
    db::ReportQueries,
    error::AppResult,
};

#[derive(Debug, Default, Deserialize)]
pub struct ChartForm {
    pub attribute: Option<String>,
}

impl ChartForm {
    /// The attribute filter, if one was actually supplied. Blank counts as none.
    pub fn filter(&self) -> Option<&str> {
        self.attribute.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Read the form from a urlencoded or multipart body. Anything unreadable
/// yields an empty form.
async fn read_chart_form(req: Request) -> ChartForm {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        match Multipart::from_request(req, &()).await {
            Ok(multipart) => read_multipart(multipart).await.unwrap_or_default(),
            Err(_) => ChartForm::default(),
        }
    } else {
        Form::<ChartForm>::from_request(req, &())
            .await
            .map(|Form(f)| f)
            .unwrap_or_default()
    }
}

// first `attribute` field wins
async fn read_multipart(mut multipart: Multipart) -> Result<ChartForm, MultipartError> {
    let mut form = ChartForm::default();
    while let Some(field) = multipart.next_field().await? {
        let is_attribute = field.name() == Some("attribute");
        if is_attribute && form.attribute.is_none() {
            form.attribute = Some(field.text().await?);
        }
    }
    Ok(form)
}

/// POST /api/chart
///
/// A missing or unreadable form body means "no filter".
pub async fn get_chart(
    State(state): State<AppState>,
    req: Request,
) -> AppResult<Json<ChartPayload>> {
    let form = read_chart_form(req).await;
    let filter = form.filter();
    tracing::debug!(?filter, "building chart");

    let mut db = ReportQueries::acquire(&state.pool).await?;
    let columns = db.list_attribute_values(filter).await?;
    let teachers = db.list_teacher_names().await?;
    let counts = db.grouped_counts(filter).await?;

    let payload = assemble_chart(&columns, &counts, &teachers, filter)?;
    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_attribute_is_no_filter() {
        let form = ChartForm { attribute: Some("  ".into()) };
        assert_eq!(form.filter(), None);
        assert_eq!(ChartForm::default().filter(), None);
    }

    #[test]
    fn attribute_passed_through_verbatim() {
        let form = ChartForm { attribute: Some("Gifted".into()) };
        assert_eq!(form.filter(), Some("Gifted"));
    }
}

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::analytics::snapshot::Section;
use crate::errors::AppError;
use crate::extract::AppQuery;
use crate::models::envelope::Envelope;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyticsParams {
    #[serde(rename = "type")]
    pub section: Option<String>,
}

/// GET /api/hr/analytics
/// An unrecognised `type` falls back to the full snapshot.
pub async fn handle_analytics(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AnalyticsParams>,
) -> Result<Json<Envelope<Value>>, AppError> {
    let section = params
        .section
        .as_deref()
        .and_then(|s| s.parse::<Section>().ok());
    let data = state
        .analytics
        .section(section)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(Envelope::data(data)))
}

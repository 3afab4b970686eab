use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::candidates::pipeline::{
    build_candidate, compute_statistics, filter_candidates, validate_new_candidate,
    CandidateFilter, CandidateStatistics,
};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::candidate::{Candidate, CandidateStatusChange, NewCandidate};
use crate::models::envelope::Envelope;
use crate::query::parse_param;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListParams {
    pub status: Option<String>,
    pub job_id: Option<String>,
    pub limit: Option<String>,
}

/// GET /api/hr/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CandidateListParams>,
) -> Result<Json<Envelope<Vec<Candidate>, CandidateStatistics>>, AppError> {
    let filter = CandidateFilter {
        status: parse_param("status", params.status.as_deref())?,
        job_id: parse_param("jobId", params.job_id.as_deref())?,
        limit: parse_param("limit", params.limit.as_deref())?,
    };
    let all = state.store.candidates.all().await;
    let statistics = compute_statistics(&all);
    let data = filter_candidates(all, &filter);
    Ok(Json(Envelope::data(data).with_statistics(statistics)))
}

/// POST /api/hr/candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewCandidate>,
) -> Result<(StatusCode, Json<Envelope<Candidate>>), AppError> {
    validate_new_candidate(&req)?;
    let today = Utc::now().date_naive();
    let candidate = state
        .store
        .candidates
        .insert(|id| build_candidate(id, req, today))
        .await;
    info!(candidate_id = candidate.id, "Candidate added");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(candidate).with_message("Candidate added successfully")),
    ))
}

/// PATCH /api/hr/candidates/:id
pub async fn handle_update_candidate_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(req): AppJson<CandidateStatusChange>,
) -> Result<Json<Envelope<Candidate>>, AppError> {
    let candidate = state
        .store
        .candidates
        .update(id, |c| {
            c.status = req.status;
            Ok::<(), AppError>(())
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))??;
    info!(candidate_id = id, status = ?req.status, "Candidate status changed");
    Ok(Json(Envelope::data(candidate)))
}

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::jobs::board::{search_board, BoardSearch};
use crate::jobs::listing::{apply_update, build_job, filter_jobs, validate_new_job, JobFilter};
use crate::models::envelope::Envelope;
use crate::models::job::{Job, JobUpdate, NewJob};
use crate::query::parse_param;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobListParams {
    pub status: Option<String>,
    pub department: Option<String>,
}

#[derive(Deserialize)]
pub struct BoardParams {
    pub q: Option<String>,
    pub location: Option<String>,
}

fn job_not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Job {id} not found"))
}

/// GET /api/hr/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<JobListParams>,
) -> Result<Json<Envelope<Vec<Job>>>, AppError> {
    let filter = JobFilter {
        status: parse_param("status", params.status.as_deref())?,
        department: params.department.filter(|d| !d.trim().is_empty()),
    };
    let jobs = filter_jobs(state.store.jobs.all().await, &filter);
    let total = jobs.len();
    Ok(Json(Envelope::data(jobs).with_total(total)))
}

/// POST /api/hr/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewJob>,
) -> Result<(StatusCode, Json<Envelope<Job>>), AppError> {
    validate_new_job(&req)?;
    let today = Utc::now().date_naive();
    let job = state
        .store
        .jobs
        .insert(|id| build_job(id, req, today))
        .await;
    info!(job_id = job.id, "Job created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(job).with_message("Job created successfully")),
    ))
}

/// GET /api/hr/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<Envelope<Job>>, AppError> {
    let job = state.store.jobs.get(id).await.ok_or_else(|| job_not_found(id))?;
    Ok(Json(Envelope::data(job)))
}

/// PUT /api/hr/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(update): AppJson<JobUpdate>,
) -> Result<Json<Envelope<Job>>, AppError> {
    let today = Utc::now().date_naive();
    let job = state
        .store
        .jobs
        .update(id, |job| apply_update(job, update, today))
        .await
        .ok_or_else(|| job_not_found(id))??;
    info!(job_id = id, "Job updated");
    Ok(Json(
        Envelope::data(job).with_message("Job updated successfully"),
    ))
}

/// DELETE /api/hr/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<Envelope<Job>>, AppError> {
    let job = state
        .store
        .jobs
        .remove(id)
        .await
        .ok_or_else(|| job_not_found(id))?;
    info!(job_id = id, "Job deleted");
    Ok(Json(
        Envelope::data(job).with_message("Job deleted successfully"),
    ))
}

/// GET /api/jobs
pub async fn handle_job_board(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<BoardParams>,
) -> Json<Envelope<Vec<Job>>> {
    let search = BoardSearch {
        q: params.q.filter(|q| !q.trim().is_empty()),
        location: params.location.filter(|l| !l.trim().is_empty()),
    };
    let jobs = search_board(state.store.jobs.all().await, &search);
    let total = jobs.len();
    Json(Envelope::data(jobs).with_total(total))
}

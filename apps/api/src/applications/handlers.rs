use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;

use crate::applications::submission::{applications_for, submit};
use crate::auth::session::{CurrentSession, HrSession};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::application::{Application, ApplicationStatusChange, NewApplication};
use crate::models::envelope::Envelope;
use crate::state::AppState;

/// GET /api/applications
pub async fn handle_my_applications(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Json<Envelope<Vec<Application>>> {
    let mine = applications_for(state.store.applications.all().await, &session.user.id);
    let total = mine.len();
    Json(Envelope::data(mine).with_total(total))
}

/// POST /api/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    AppJson(req): AppJson<NewApplication>,
) -> Result<(StatusCode, Json<Envelope<Application>>), AppError> {
    let application = submit(&state.store, &session.user.id, req.job_id, Utc::now()).await?;
    info!(
        application_id = application.id,
        job_id = application.job_id,
        "Application submitted"
    );
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(application).with_message("Application submitted successfully")),
    ))
}

/// PATCH /api/hr/applications/:id
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    HrSession(reviewer): HrSession,
    AppPath(id): AppPath<u64>,
    AppJson(req): AppJson<ApplicationStatusChange>,
) -> Result<Json<Envelope<Application>>, AppError> {
    let application = state
        .store
        .applications
        .update(id, |a| {
            a.status = req.status;
            Ok::<(), AppError>(())
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))??;
    info!(
        application_id = id,
        status = ?req.status,
        reviewer = %reviewer.user.id,
        "Application status changed"
    );
    Ok(Json(Envelope::data(application)))
}

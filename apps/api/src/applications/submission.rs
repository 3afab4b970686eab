use chrono::{DateTime, Utc};
use tracing::warn;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::{Job, JobStatus};
use crate::store::Store;

/// Only active postings take applications.
pub fn ensure_open(job: &Job) -> Result<(), AppError> {
    if job.status != JobStatus::Active {
        return Err(AppError::Validation(format!(
            "Job {} is not accepting applications",
            job.id
        )));
    }
    Ok(())
}

/// One application per applicant per job.
pub fn ensure_not_applied(
    existing: &[Application],
    applicant: &str,
    job_id: u64,
) -> Result<(), AppError> {
    if existing
        .iter()
        .any(|a| a.applicant == applicant && a.job_id == job_id)
    {
        return Err(AppError::Validation(format!(
            "Already applied to job {job_id}"
        )));
    }
    Ok(())
}

pub fn applications_for(all: Vec<Application>, applicant: &str) -> Vec<Application> {
    all.into_iter().filter(|a| a.applicant == applicant).collect()
}

/// Bumps the job's applicant count and records the application.
/// The open check and the increment run under the job's lock; a refused
/// insert takes the increment back.
pub async fn submit(
    store: &Store,
    applicant: &str,
    job_id: u64,
    now: DateTime<Utc>,
) -> Result<Application, AppError> {
    let mut bumped = false;
    let job = store
        .jobs
        .update(job_id, |j| {
            ensure_open(j)?;
            let next = j.applicants.saturating_add(1);
            bumped = next != j.applicants;
            j.applicants = next;
            Ok::<(), AppError>(())
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))??;

    let inserted = store
        .applications
        .try_insert(
            |existing| ensure_not_applied(existing, applicant, job_id),
            |id| Application {
                id,
                job_id,
                job_title: job.title.clone(),
                applicant: applicant.to_string(),
                applied_at: now,
                status: ApplicationStatus::Pending,
            },
        )
        .await;

    if inserted.is_err() && bumped {
        let restored = store
            .jobs
            .update(job_id, |j| {
                j.applicants = j.applicants.saturating_sub(1);
                Ok::<(), AppError>(())
            })
            .await;
        if restored.is_none() {
            warn!(job_id, "Job removed before its applicant count was restored");
        }
    }
    inserted
}

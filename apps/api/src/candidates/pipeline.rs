use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateStatus, NewCandidate};
use crate::query::{apply_limit, require_text};

#[derive(Debug, Default)]
pub struct CandidateFilter {
    pub status: Option<CandidateStatus>,
    pub job_id: Option<u64>,
    pub limit: Option<usize>,
}

/// Counts across the whole pipeline, independent of any filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateStatistics {
    pub total: usize,
    pub new: usize,
    pub shortlisted: usize,
    pub interviewed: usize,
    pub hired: usize,
}

pub fn compute_statistics(candidates: &[Candidate]) -> CandidateStatistics {
    let count = |status: CandidateStatus| candidates.iter().filter(|c| c.status == status).count();
    CandidateStatistics {
        total: candidates.len(),
        new: count(CandidateStatus::New),
        shortlisted: count(CandidateStatus::Shortlisted),
        interviewed: count(CandidateStatus::Interviewed),
        hired: count(CandidateStatus::Hired),
    }
}

/// Applies status, then job id, then limit.
pub fn filter_candidates(candidates: Vec<Candidate>, filter: &CandidateFilter) -> Vec<Candidate> {
    let filtered = candidates
        .into_iter()
        .filter(|c| filter.status.map_or(true, |s| c.status == s))
        .filter(|c| filter.job_id.map_or(true, |j| c.job_id == Some(j)))
        .collect();
    apply_limit(filtered, filter.limit)
}

/// Name and email must be non-blank, and the email must at least contain `@`.
pub fn validate_new_candidate(req: &NewCandidate) -> Result<(), AppError> {
    require_text("name", &req.name)?;
    require_text("email", &req.email)?;
    if !req.email.contains('@') {
        return Err(AppError::Validation(format!(
            "'{}' is not an email address",
            req.email
        )));
    }
    Ok(())
}

pub fn build_candidate(id: u64, req: NewCandidate, today: NaiveDate) -> Candidate {
    Candidate {
        id,
        name: req.name,
        position: req.position,
        experience: req.experience,
        status: CandidateStatus::New,
        applied_date: today,
        skills: req.skills,
        email: req.email,
        phone: req.phone,
        location: req.location,
        resume: req.resume,
        job_id: req.job_id,
    }
}

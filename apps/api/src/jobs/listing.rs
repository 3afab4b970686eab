use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::job::{Job, JobStatus, JobUpdate, NewJob};
use crate::query::require_text;

/// Filters accepted by GET /api/hr/jobs.
#[derive(Debug, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub department: Option<String>,
}

/// Status matches exactly, department case-insensitively.
pub fn filter_jobs(jobs: Vec<Job>, filter: &JobFilter) -> Vec<Job> {
    jobs.into_iter()
        .filter(|j| filter.status.map_or(true, |s| j.status == s))
        .filter(|j| {
            filter
                .department
                .as_deref()
                .map_or(true, |d| j.department.to_lowercase() == d.to_lowercase())
        })
        .collect()
}

pub fn validate_new_job(req: &NewJob) -> Result<(), AppError> {
    require_text("title", &req.title)?;
    require_text("department", &req.department)?;
    require_text("location", &req.location)?;
    require_text("description", &req.description)?;
    Ok(())
}

/// New postings start active with no applicants.
pub fn build_job(id: u64, req: NewJob, today: NaiveDate) -> Job {
    Job {
        id,
        title: req.title,
        department: req.department,
        location: req.location,
        job_type: req.job_type,
        salary: req
            .salary
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Not specified".to_string()),
        description: req.description,
        requirements: req.requirements,
        applicants: 0,
        status: JobStatus::Active,
        created_at: today,
        updated_at: today,
    }
}

/// Merges the provided fields into `job`. The id never changes.
pub fn apply_update(job: &mut Job, update: JobUpdate, today: NaiveDate) -> Result<(), AppError> {
    for (field, value) in [
        ("title", &update.title),
        ("department", &update.department),
        ("location", &update.location),
        ("description", &update.description),
    ] {
        if let Some(v) = value {
            require_text(field, v)?;
        }
    }

    if let Some(v) = update.title {
        job.title = v;
    }
    if let Some(v) = update.department {
        job.department = v;
    }
    if let Some(v) = update.location {
        job.location = v;
    }
    if let Some(v) = update.job_type {
        job.job_type = v;
    }
    if let Some(v) = update.salary {
        job.salary = v;
    }
    if let Some(v) = update.description {
        job.description = v;
    }
    if let Some(v) = update.requirements {
        job.requirements = v;
    }
    if let Some(v) = update.applicants {
        job.applicants = v;
    }
    if let Some(v) = update.status {
        job.status = v;
    }
    job.updated_at = today;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobType;
    use crate::store::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn new_job() -> NewJob {
        NewJob {
            title: "Platform Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Contract,
            salary: None,
            description: "Build the platform".to_string(),
            requirements: "Rust".to_string(),
        }
    }

    #[test]
    fn test_filter_by_department_is_case_insensitive() {
        let filter = JobFilter {
            status: None,
            department: Some("engineering".to_string()),
        };
        let jobs = filter_jobs(seed::jobs(), &filter);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Senior Frontend Developer");
    }

    #[test]
    fn test_filter_by_department_folds_non_ascii_case() {
        let mut jobs = seed::jobs();
        jobs[2].department = "Événements".to_string();
        let filter = JobFilter {
            status: None,
            department: Some("événements".to_string()),
        };
        let found = filter_jobs(jobs, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn test_filter_by_status_narrows() {
        let mut jobs = seed::jobs();
        jobs[0].status = JobStatus::Closed;
        let filter = JobFilter {
            status: Some(JobStatus::Active),
            department: None,
        };
        assert_eq!(filter_jobs(jobs, &filter).len(), 3);
    }

    #[test]
    fn test_no_filter_returns_all() {
        assert_eq!(filter_jobs(seed::jobs(), &JobFilter::default()).len(), 4);
    }

    #[test]
    fn test_build_job_defaults() {
        let job = build_job(9, new_job(), today());
        assert_eq!(job.id, 9);
        assert_eq!(job.salary, "Not specified");
        assert_eq!(job.applicants, 0);
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.created_at, today());
        assert_eq!(job.updated_at, today());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut req = new_job();
        req.title = " ".to_string();
        assert!(validate_new_job(&req).is_err());
        assert!(validate_new_job(&new_job()).is_ok());
    }

    #[test]
    fn test_apply_update_merges_and_bumps_date() {
        let mut job = seed::jobs().remove(0);
        let update = JobUpdate {
            salary: Some("$1".to_string()),
            status: Some(JobStatus::Paused),
            ..Default::default()
        };
        apply_update(&mut job, update, today()).unwrap();
        assert_eq!(job.id, 1);
        assert_eq!(job.salary, "$1");
        assert_eq!(job.status, JobStatus::Paused);
        assert_eq!(job.title, "Senior Frontend Developer");
        assert_eq!(job.updated_at, today());
        assert_ne!(job.created_at, today());
    }

    #[test]
    fn test_apply_update_rejects_blank_title() {
        let mut job = seed::jobs().remove(0);
        let update = JobUpdate {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(apply_update(&mut job, update, today()).is_err());
    }
}

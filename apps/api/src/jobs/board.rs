use crate::models::job::{Job, JobStatus};

/// Search parameters for the public job board.
#[derive(Debug, Default)]
pub struct BoardSearch {
    pub q: Option<String>,
    pub location: Option<String>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Active postings only. `q` matches title, description or requirements.
pub fn search_board(jobs: Vec<Job>, search: &BoardSearch) -> Vec<Job> {
    jobs.into_iter()
        .filter(|j| j.status == JobStatus::Active)
        .filter(|j| {
            search.q.as_deref().map_or(true, |q| {
                contains_ci(&j.title, q)
                    || contains_ci(&j.description, q)
                    || contains_ci(&j.requirements, q)
            })
        })
        .filter(|j| {
            search
                .location
                .as_deref()
                .map_or(true, |l| contains_ci(&j.location, l))
        })
        .collect()
}

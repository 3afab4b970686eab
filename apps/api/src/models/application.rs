use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Interview,
    Rejected,
    Accepted,
}

/// A signed-in user's application to a job on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u64,
    pub job_id: u64,
    pub job_title: String,
    /// Session subject of the applicant.
    pub applicant: String,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

impl Record for Application {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationStatusChange {
    pub status: ApplicationStatus,
}

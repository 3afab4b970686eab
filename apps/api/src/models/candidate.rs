use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    New,
    Shortlisted,
    Interviewed,
    Hired,
    Rejected,
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(CandidateStatus::New),
            "shortlisted" => Ok(CandidateStatus::Shortlisted),
            "interviewed" => Ok(CandidateStatus::Interviewed),
            "hired" => Ok(CandidateStatus::Hired),
            "rejected" => Ok(CandidateStatus::Rejected),
            other => Err(format!("unknown candidate status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub experience: String,
    pub status: CandidateStatus,
    pub applied_date: NaiveDate,
    pub skills: Vec<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub resume: Option<String>,
    pub job_id: Option<u64>,
}

impl Record for Candidate {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub resume: Option<String>,
    pub job_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateStatusChange {
    pub status: CandidateStatus,
}

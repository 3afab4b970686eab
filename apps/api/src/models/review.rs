use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Published,
    Pending,
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(ReviewStatus::Published),
            "pending" => Ok(ReviewStatus::Pending),
            other => Err(format!("unknown review status '{other}'")),
        }
    }
}

/// An employee review of the company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub employee_id: u64,
    pub name: String,
    pub position: String,
    pub department: String,
    pub rating: u8,
    pub review: String,
    pub date: NaiveDate,
    pub status: ReviewStatus,
}

impl Record for Review {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub employee_id: u64,
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub department: String,
    /// Wider than the stored rating so out-of-range input reaches validation.
    pub rating: i64,
    pub review: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewStatusChange {
    pub status: ReviewStatus,
}

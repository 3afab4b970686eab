use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::review::{NewReview, Review, ReviewStatus};
use crate::query::{apply_limit, require_text};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Default)]
pub struct ReviewFilter {
    pub status: Option<ReviewStatus>,
    pub department: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStatistics {
    pub total: usize,
    pub published: usize,
    pub pending: usize,
    /// Mean rating of published reviews, one decimal place. 0 when none are published.
    pub average_rating: f64,
}

pub fn compute_statistics(reviews: &[Review]) -> ReviewStatistics {
    let published: Vec<&Review> = reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Published)
        .collect();
    let pending = reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Pending)
        .count();

    let average_rating = if published.is_empty() {
        0.0
    } else {
        let sum: u32 = published.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(sum) / published.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    ReviewStatistics {
        total: reviews.len(),
        published: published.len(),
        pending,
        average_rating,
    }
}

/// Applies status, then department (case-insensitive), then limit.
pub fn filter_reviews(reviews: Vec<Review>, filter: &ReviewFilter) -> Vec<Review> {
    let filtered = reviews
        .into_iter()
        .filter(|r| filter.status.map_or(true, |s| r.status == s))
        .filter(|r| {
            filter
                .department
                .as_deref()
                .map_or(true, |d| r.department.to_lowercase() == d.to_lowercase())
        })
        .collect();
    apply_limit(filtered, filter.limit)
}

/// Returns the rating narrowed to its stored width.
pub fn validate_new_review(req: &NewReview) -> Result<u8, AppError> {
    require_text("name", &req.name)?;
    require_text("department", &req.department)?;
    require_text("review", &req.review)?;
    u8::try_from(req.rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                req.rating
            ))
        })
}

/// Submitted reviews wait for moderation.
pub fn build_review(id: u64, req: NewReview, rating: u8, today: NaiveDate) -> Review {
    Review {
        id,
        employee_id: req.employee_id,
        name: req.name,
        position: req.position,
        department: req.department,
        rating,
        review: req.review,
        date: today,
        status: ReviewStatus::Pending,
    }
}

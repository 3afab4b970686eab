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
use crate::models::envelope::Envelope;
use crate::models::review::{NewReview, Review, ReviewStatusChange};
use crate::query::parse_param;
use crate::reviews::moderation::{
    build_review, compute_statistics, filter_reviews, validate_new_review, ReviewFilter,
    ReviewStatistics,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReviewListParams {
    pub status: Option<String>,
    pub department: Option<String>,
    pub limit: Option<String>,
}

/// GET /api/hr/reviews
pub async fn handle_list_reviews(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ReviewListParams>,
) -> Result<Json<Envelope<Vec<Review>, ReviewStatistics>>, AppError> {
    let filter = ReviewFilter {
        status: parse_param("status", params.status.as_deref())?,
        department: params.department.filter(|d| !d.trim().is_empty()),
        limit: parse_param("limit", params.limit.as_deref())?,
    };
    let all = state.store.reviews.all().await;
    let statistics = compute_statistics(&all);
    Ok(Json(
        Envelope::data(filter_reviews(all, &filter)).with_statistics(statistics),
    ))
}

/// POST /api/hr/reviews
pub async fn handle_create_review(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewReview>,
) -> Result<(StatusCode, Json<Envelope<Review>>), AppError> {
    let rating = validate_new_review(&req)?;
    let today = Utc::now().date_naive();
    let review = state
        .store
        .reviews
        .insert(|id| build_review(id, req, rating, today))
        .await;
    info!(review_id = review.id, "Review submitted");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(review).with_message("Review submitted successfully")),
    ))
}

/// PATCH /api/hr/reviews/:id
pub async fn handle_moderate_review(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(req): AppJson<ReviewStatusChange>,
) -> Result<Json<Envelope<Review>>, AppError> {
    let review = state
        .store
        .reviews
        .update(id, |r| {
            r.status = req.status;
            Ok::<(), AppError>(())
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Review {id} not found")))??;
    info!(review_id = id, status = ?req.status, "Review moderated");
    Ok(Json(Envelope::data(review)))
}

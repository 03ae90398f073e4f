//! Rating submission handler

use axum::{extract::State, Json};

use crate::dto::{SubmitRatingRequest, SubmitRatingResponse};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Rating handler - POST /api/v1/ratings
///
/// `stars` is passed through unvalidated; the triage rule handles any
/// integer. The record is persisted before the decision comes back.
pub async fn submit_rating(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRatingRequest>,
) -> Result<Json<ApiResponse<SubmitRatingResponse>>, ApiError> {
    if payload.business_id.is_empty() {
        return Err(ApiError::BadRequest("business_id is required".to_string()));
    }

    let decision = state
        .rating_service
        .submit_rating(&payload.business_id, payload.stars)
        .await?;
    Ok(Json(ApiResponse::success(SubmitRatingResponse { decision })))
}

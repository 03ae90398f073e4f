//! Feedback handlers
//!
//! Persistence and owner notification are separate endpoints on purpose:
//! the page records the feedback first and fires the notification second,
//! so a failed email never rolls back a stored message.

use axum::{extract::State, Json};

use crate::dto::{
    DeliveryDto, NotifyFeedbackRequest, SubmitFeedbackRequest, SubmitFeedbackResponse,
};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Feedback handler - POST /api/v1/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<SubmitFeedbackRequest>,
) -> Result<Json<ApiResponse<SubmitFeedbackResponse>>, ApiError> {
    if payload.business_id.is_empty() {
        return Err(ApiError::BadRequest("business_id is required".to_string()));
    }
    if payload.message.is_empty() {
        return Err(ApiError::BadRequest("message is required".to_string()));
    }

    let handle = state
        .feedback_service
        .submit_feedback(&payload.business_id, &payload.message, payload.email)
        .await?;
    Ok(Json(ApiResponse::success(SubmitFeedbackResponse {
        id: handle.id,
    })))
}

/// Owner notification handler - POST /api/v1/feedback/notify
pub async fn notify_owner(
    State(state): State<AppState>,
    Json(payload): Json<NotifyFeedbackRequest>,
) -> Result<Json<ApiResponse<DeliveryDto>>, ApiError> {
    let receipt = state
        .feedback_service
        .send_feedback_email(&payload.into())
        .await?;
    Ok(Json(ApiResponse::success(DeliveryDto::from(receipt))))
}

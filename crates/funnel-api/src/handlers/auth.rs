// ============================================================================
// Funnel API - Auth Handlers
// File: crates/funnel-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, logout, session probe)

use axum::{extract::State, Json};

use crate::dto::{LoginRequest, SessionResponse, UserDto};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login handler - POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = state.session.login(&payload.email, &payload.password).await?;
    Ok(Json(ApiResponse::success(SessionResponse {
        logged_in: true,
        user: Some(UserDto::from(user)),
    })))
}

/// Logout handler - POST /api/v1/auth/logout
pub async fn logout(State(state): State<AppState>) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.session.logout().await?;
    Ok(Json(ApiResponse::success(())))
}

/// Session probe - GET /api/v1/auth/session
pub async fn session(State(state): State<AppState>) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::success(SessionResponse {
        logged_in: state.session.is_logged_in(),
        user: state.session.current_user().map(UserDto::from),
    }))
}

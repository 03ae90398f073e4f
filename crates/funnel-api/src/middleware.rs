//! Route guard middleware
//!
//! Two surfaces consult the same logged-in signal: `page_guard` evaluates
//! page navigations against the route table and redirects to the login
//! page, `require_auth` protects API endpoints with a 401 envelope.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use funnel_core::routing::NavigationDecision;

use crate::error::ApiError;
use crate::state::AppState;

/// Navigation hook: each request is decided on its own against the session
/// state at that moment.
pub async fn page_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match state
        .route_table
        .evaluate(&path, state.session.is_logged_in())
    {
        NavigationDecision::RedirectToLogin => Redirect::to("/login").into_response(),
        NavigationDecision::Allow => next.run(request).await,
    }
}

pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.session.is_logged_in() {
        next.run(request).await
    } else {
        ApiError::Unauthorized("Login required".to_string()).into_response()
    }
}

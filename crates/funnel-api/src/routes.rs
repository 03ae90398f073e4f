//! Router assembly

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, business, feedback, health, rating};
use crate::middleware::require_auth;
use crate::state::AppState;

/// The API surface. Creation and directory listing sit behind the auth
/// guard; the funnel endpoints are public.
pub fn api_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/v1/businesses",
            post(business::create_business).get(business::list_businesses),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session))
        .route("/api/v1/businesses/{id}", get(business::get_business))
        .route("/api/v1/ratings", post(rating::submit_rating))
        .route("/api/v1/feedback", post(feedback::submit_feedback))
        .route("/api/v1/feedback/notify", post(feedback::notify_owner))
        .merge(protected)
        .with_state(state)
}

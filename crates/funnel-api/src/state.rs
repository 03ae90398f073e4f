use std::sync::Arc;

use funnel_core::routing::RouteTable;
use funnel_core::services::{BusinessService, FeedbackService, RatingService, SessionService};
use funnel_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub business_service: Arc<BusinessService>,
    pub rating_service: Arc<RatingService>,
    pub feedback_service: Arc<FeedbackService>,
    pub session: Arc<SessionService>,
    pub route_table: Arc<RouteTable>,
    pub config: AppConfig,
}

//! # Funnel Core - Domain Module
//!
//! Domain entities for the review funnel application.

pub mod auth_user;
pub mod business;
pub mod feedback;
pub mod rating;

// Re-export all entities
pub use auth_user::AuthUser;
pub use business::{Business, NewBusiness};
pub use feedback::Feedback;
pub use rating::Rating;

//! Business domain entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use funnel_shared::{new_id, now_millis};

/// A business being rated. Created once by the creation flow and read-only
/// afterwards; `id` and `created_at` never change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Business {
    pub id: String,
    pub name: String,

    #[validate(email)]
    pub email: String,

    /// External review profile the funnel redirects satisfied customers to.
    pub review_profile_url: String,
    pub logo_url: Option<String>,

    pub primary_color: String,
    pub secondary_color: String,

    /// Epoch milliseconds, set exactly once at creation.
    pub created_at: i64,
}

/// Creation payload before the store assigns identity and timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBusiness {
    pub name: String,
    pub email: String,
    pub review_profile_url: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Business {
    pub fn new(new: NewBusiness, logo_url: Option<String>) -> Result<Self, DomainError> {
        let business = Self {
            id: new_id(),
            name: new.name,
            email: new.email,
            review_profile_url: new.review_profile_url,
            logo_url,
            primary_color: new.primary_color,
            secondary_color: new.secondary_color,
            created_at: now_millis(),
        };
        business
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(business)
    }

    pub fn has_logo(&self) -> bool {
        self.logo_url.is_some()
    }
}

//! Request and response payloads

use serde::{Deserialize, Serialize};

use funnel_core::domain::{AuthUser, Business};
use funnel_core::gateways::{DeliveryReceipt, FeedbackEmail};
use funnel_core::services::BranchDecision;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub uid: String,
    pub email: String,
}

impl From<AuthUser> for UserDto {
    fn from(user: AuthUser) -> Self {
        Self {
            uid: user.uid,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

#[derive(Debug, Serialize)]
pub struct BusinessDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub review_profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub created_at: i64,
}

impl From<Business> for BusinessDto {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            name: business.name,
            email: business.email,
            review_profile_url: business.review_profile_url,
            logo_url: business.logo_url,
            primary_color: business.primary_color,
            secondary_color: business.secondary_color,
            created_at: business.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitRatingRequest {
    pub business_id: String,
    pub stars: i32,
}

#[derive(Debug, Serialize)]
pub struct SubmitRatingResponse {
    pub decision: BranchDecision,
}

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub business_id: String,
    pub message: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitFeedbackResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct NotifyFeedbackRequest {
    pub business_email: String,
    pub message: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub business_id: Option<String>,
}

impl From<NotifyFeedbackRequest> for FeedbackEmail {
    fn from(request: NotifyFeedbackRequest) -> Self {
        Self {
            business_email: request.business_email,
            message: request.message,
            user_email: request.user_email,
            business_id: request.business_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeliveryDto {
    pub status: u16,
    pub text: String,
}

impl From<DeliveryReceipt> for DeliveryDto {
    fn from(receipt: DeliveryReceipt) -> Self {
        Self {
            status: receipt.status,
            text: receipt.text,
        }
    }
}

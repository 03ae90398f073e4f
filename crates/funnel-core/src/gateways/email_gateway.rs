//! Email gateway trait (port)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fields of the owner notification template.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackEmail {
    pub business_email: String,
    pub message: String,
    pub user_email: Option<String>,
    pub business_id: Option<String>,
}

/// What the transactional email API reported back.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

/// Port for the hosted transactional email API. Fails loudly on transport
/// error; no retry, no backoff.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailGateway: Send + Sync {
    async fn send_feedback_notification(
        &self,
        email: &FeedbackEmail,
    ) -> Result<DeliveryReceipt, DomainError>;
}

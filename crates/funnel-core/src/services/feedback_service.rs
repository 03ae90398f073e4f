//! Feedback service
//!
//! Persists private feedback and, as a separate operation, notifies the
//! business owner by email. Persistence and notification are composed by
//! the caller, never chained internally: feedback can land in the store
//! even when the notification later fails.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::Feedback;
use crate::error::DomainError;
use crate::gateways::{DeliveryReceipt, DocumentRef, DocumentStore, EmailGateway, FeedbackEmail};

pub struct FeedbackService {
    store: Arc<dyn DocumentStore>,
    mailer: Arc<dyn EmailGateway>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn DocumentStore>, mailer: Arc<dyn EmailGateway>) -> Self {
        Self { store, mailer }
    }

    /// Append one feedback record. Does not send email.
    pub async fn submit_feedback(
        &self,
        business_id: &str,
        message: &str,
        email: Option<String>,
    ) -> Result<DocumentRef, DomainError> {
        let feedback = Feedback::new(business_id.to_string(), message.to_string(), email);
        let handle = self.store.append_feedback(&feedback).await?;
        info!("Feedback recorded for business {}", business_id);
        Ok(handle)
    }

    /// Notify the business owner about a piece of feedback.
    ///
    /// Required fields are checked before any network call; a transport
    /// failure is logged here and re-raised unmodified. No retry.
    pub async fn send_feedback_email(
        &self,
        email: &FeedbackEmail,
    ) -> Result<DeliveryReceipt, DomainError> {
        if email.business_email.is_empty() {
            return Err(DomainError::ValidationError(
                "Business email is required.".to_string(),
            ));
        }
        if email.message.is_empty() {
            return Err(DomainError::ValidationError(
                "Message is required.".to_string(),
            ));
        }

        match self.mailer.send_feedback_notification(email).await {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                error!("Feedback notification failed: {}", err);
                Err(err)
            }
        }
    }
}

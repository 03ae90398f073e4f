//! Document store gateway trait (port)

use async_trait::async_trait;

use crate::domain::{Business, Feedback, Rating};
use crate::error::DomainError;

/// Handle to a record created by an append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub collection: String,
    pub id: String,
}

/// Port for the hosted document database.
///
/// Collections in use: `businesses` (read plus the creation flow's append),
/// `ratings` and `feedback` (append-only). Absence of a business is a normal
/// outcome and comes back as `Ok(None)`; only transport or permission
/// failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_business(&self, id: &str) -> Result<Option<Business>, DomainError>;
    async fn append_business(&self, business: &Business) -> Result<DocumentRef, DomainError>;
    async fn append_rating(&self, rating: &Rating) -> Result<DocumentRef, DomainError>;
    async fn append_feedback(&self, feedback: &Feedback) -> Result<DocumentRef, DomainError>;
}

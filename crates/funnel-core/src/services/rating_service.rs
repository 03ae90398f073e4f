//! Rating triage service
//!
//! Records a rating, then decides whether the customer is sent to the
//! public review profile or to the private feedback form.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::Rating;
use crate::error::DomainError;
use crate::gateways::DocumentStore;
use funnel_shared::constants::REDIRECT_THRESHOLD;

/// Outcome of a rating submission. Exactly two branches; there is no
/// neutral third path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchDecision {
    Redirect,
    Feedback,
}

impl BranchDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchDecision::Redirect => "redirect",
            BranchDecision::Feedback => "feedback",
        }
    }
}

pub struct RatingService {
    store: Arc<dyn DocumentStore>,
}

impl RatingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist the rating, then return the branch decision.
    ///
    /// The append is awaited to completion before the decision is returned,
    /// so callers never race a redirect against the write. A store failure
    /// propagates unmodified. Every call appends a fresh record; submitting
    /// twice records twice.
    ///
    /// `stars` is triaged as-is: at or above the threshold redirects,
    /// anything below (zero and negative included) collects feedback.
    pub async fn submit_rating(
        &self,
        business_id: &str,
        stars: i32,
    ) -> Result<BranchDecision, DomainError> {
        let rating = Rating::new(business_id.to_string(), stars);
        self.store.append_rating(&rating).await?;

        let decision = if stars >= REDIRECT_THRESHOLD {
            BranchDecision::Redirect
        } else {
            BranchDecision::Feedback
        };
        info!(
            "Rating recorded for business {}: {} stars -> {}",
            business_id,
            stars,
            decision.as_str()
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::document_store::{DocumentRef, MockDocumentStore};
    use funnel_shared::now_millis;

    fn rating_ref() -> DocumentRef {
        DocumentRef {
            collection: "ratings".to_string(),
            id: "r1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_high_rating_redirects() {
        let mut store = MockDocumentStore::new();
        store
            .expect_append_rating()
            .times(1)
            .returning(|_| Ok(rating_ref()));

        let service = RatingService::new(Arc::new(store));
        let decision = service.submit_rating("b1", 5).await.unwrap();
        assert_eq!(decision, BranchDecision::Redirect);
    }

    #[tokio::test]
    async fn test_threshold_rating_redirects() {
        let mut store = MockDocumentStore::new();
        store.expect_append_rating().returning(|_| Ok(rating_ref()));

        let service = RatingService::new(Arc::new(store));
        let decision = service.submit_rating("b1", 3).await.unwrap();
        assert_eq!(decision, BranchDecision::Redirect);
    }

    #[tokio::test]
    async fn test_low_rating_collects_feedback() {
        let mut store = MockDocumentStore::new();
        store.expect_append_rating().returning(|_| Ok(rating_ref()));

        let service = RatingService::new(Arc::new(store));
        for stars in [2, 1, 0, -4] {
            let decision = service.submit_rating("b1", stars).await.unwrap();
            assert_eq!(decision, BranchDecision::Feedback);
        }
    }

    #[tokio::test]
    async fn test_record_matches_submission() {
        let before = now_millis();
        let mut store = MockDocumentStore::new();
        store
            .expect_append_rating()
            .times(1)
            .withf(move |r| r.business_id == "b1" && r.stars == 5 && r.created_at >= before)
            .returning(|_| Ok(rating_ref()));

        let service = RatingService::new(Arc::new(store));
        assert_eq!(
            service.submit_rating("b1", 5).await.unwrap(),
            BranchDecision::Redirect
        );
    }

    #[tokio::test]
    async fn test_out_of_range_stars_are_persisted_and_triaged() {
        let mut store = MockDocumentStore::new();
        store
            .expect_append_rating()
            .times(2)
            .returning(|_| Ok(rating_ref()));

        let service = RatingService::new(Arc::new(store));
        assert_eq!(
            service.submit_rating("b1", 11).await.unwrap(),
            BranchDecision::Redirect
        );
        assert_eq!(
            service.submit_rating("b1", -1).await.unwrap(),
            BranchDecision::Feedback
        );
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockDocumentStore::new();
        store
            .expect_append_rating()
            .returning(|_| Err(DomainError::StoreError("permission denied".to_string())));

        let service = RatingService::new(Arc::new(store));
        let err = service.submit_rating("b1", 5).await.unwrap_err();
        assert!(matches!(err, DomainError::StoreError(_)));
    }

    #[tokio::test]
    async fn test_no_deduplication_between_calls() {
        let mut store = MockDocumentStore::new();
        store
            .expect_append_rating()
            .times(2)
            .returning(|_| Ok(rating_ref()));

        let service = RatingService::new(Arc::new(store));
        service.submit_rating("b1", 4).await.unwrap();
        service.submit_rating("b1", 4).await.unwrap();
    }
}

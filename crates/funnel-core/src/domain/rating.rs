//! Rating domain entity

use serde::{Deserialize, Serialize};

use funnel_shared::now_millis;

/// One rating submission. Append-only: every submission creates a new
/// record, and records are never mutated or deleted.
///
/// `stars` is expected to be 1-5 but the range is deliberately not
/// validated; out-of-range values are persisted and triaged like any other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub business_id: String,
    pub stars: i32,

    /// Epoch milliseconds at submission.
    pub created_at: i64,
}

impl Rating {
    pub fn new(business_id: String, stars: i32) -> Self {
        Self {
            business_id,
            stars,
            created_at: now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rating_is_stamped() {
        let before = now_millis();
        let rating = Rating::new("b1".to_string(), 4);
        assert_eq!(rating.business_id, "b1");
        assert_eq!(rating.stars, 4);
        assert!(rating.created_at >= before);
    }

    #[test]
    fn test_out_of_range_stars_are_kept() {
        assert_eq!(Rating::new("b1".to_string(), 0).stars, 0);
        assert_eq!(Rating::new("b1".to_string(), -2).stars, -2);
        assert_eq!(Rating::new("b1".to_string(), 11).stars, 11);
    }
}

//! Feedback domain entity

use serde::{Deserialize, Serialize};

use funnel_shared::now_millis;

/// Private feedback left by a low-rating customer. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub business_id: String,
    pub message: String,

    /// The submitter may stay anonymous.
    pub email: Option<String>,

    /// Epoch milliseconds at submission.
    pub created_at: i64,
}

impl Feedback {
    pub fn new(business_id: String, message: String, email: Option<String>) -> Self {
        Self {
            business_id,
            message,
            email,
            created_at: now_millis(),
        }
    }
}

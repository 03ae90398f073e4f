//! Common types

use chrono::Utc;
use uuid::Uuid;

pub type DocumentId = String;

pub fn new_id() -> DocumentId {
    Uuid::new_v4().to_string()
}

/// Current time as epoch milliseconds. Record timestamps are stored as
/// integer millis, matching what the document store holds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

//! Application-wide constants

/// Star count at or above which a rating is routed to the public review
/// profile instead of the private feedback form. Product rule.
pub const REDIRECT_THRESHOLD: i32 = 3;

pub const COLLECTION_BUSINESSES: &str = "businesses";
pub const COLLECTION_RATINGS: &str = "ratings";
pub const COLLECTION_FEEDBACK: &str = "feedback";

/// Placeholder rendered into the notification template when the submitter
/// left no email.
pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

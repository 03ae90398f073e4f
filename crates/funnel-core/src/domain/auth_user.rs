//! Authenticated user identity

use serde::{Deserialize, Serialize};

/// Identity returned by the upstream auth provider after a successful
/// credential check or restored session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
}

//! In-memory business directory
//!
//! Append-only list of business records for the current session. The
//! directory is the only writer of its list; readers get clones.

use std::sync::RwLock;

use crate::domain::Business;

#[derive(Default)]
pub struct BusinessDirectory {
    businesses: RwLock<Vec<Business>>,
}

impl BusinessDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, business: Business) {
        self.businesses.write().unwrap().push(business);
    }

    pub fn all(&self) -> Vec<Business> {
        self.businesses.read().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.read().unwrap().is_empty()
    }
}

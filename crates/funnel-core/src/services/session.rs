//! Session state
//!
//! Process-lifetime holder of the authenticated identity. Two sources back
//! the logged-in signal: the in-memory identity fed by the provider's
//! change stream, and the durable marker that survives restarts. They may
//! transiently disagree (a restarted process reads the marker before the
//! listener delivers the restored session), so the signal is the inclusive
//! OR of both.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::domain::AuthUser;
use crate::error::DomainError;
use crate::gateways::{IdentityGateway, MarkerStore};
use funnel_shared::utils::mask_email;

pub struct SessionService {
    identity: Arc<dyn IdentityGateway>,
    marker: Arc<dyn MarkerStore>,
    current: RwLock<Option<AuthUser>>,
}

impl SessionService {
    pub fn new(identity: Arc<dyn IdentityGateway>, marker: Arc<dyn MarkerStore>) -> Arc<Self> {
        Arc::new(Self {
            identity,
            marker,
            current: RwLock::new(None),
        })
    }

    /// Subscribe to the provider's identity-change stream and spawn the
    /// listener. The stream delivers the current session immediately, then
    /// every change; each notification updates the in-memory identity and
    /// writes or erases the durable marker.
    pub fn init(self: &Arc<Self>) {
        let mut rx = self.identity.subscribe();
        let session = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                let user = rx.borrow_and_update().clone();
                session.apply_identity(user);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    fn apply_identity(&self, user: Option<AuthUser>) {
        match &user {
            Some(u) => self.marker.put(&u.uid),
            None => self.marker.clear(),
        }
        *self.current.write().unwrap() = user;
    }

    /// Await the upstream credential check; on success set identity and
    /// marker. Upstream failures propagate unmodified.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, DomainError> {
        info!("Login attempt for email: {}", mask_email(email));
        let user = match self.identity.sign_in(email, password).await {
            Ok(user) => user,
            Err(err) => {
                warn!("Login failed for {}: {}", mask_email(email), err);
                return Err(err);
            }
        };

        self.marker.put(&user.uid);
        *self.current.write().unwrap() = Some(user.clone());
        info!("Login successful for: {}", mask_email(email));
        Ok(user)
    }

    /// Await upstream sign-out, then clear identity and marker
    /// unconditionally.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.identity.sign_out().await?;
        *self.current.write().unwrap() = None;
        self.marker.clear();
        info!("Logged out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.current.read().unwrap().clone()
    }

    /// The authoritative logged-in signal: in-memory identity OR durable
    /// marker. Collapsing this to one source breaks the reload case.
    pub fn is_logged_in(&self) -> bool {
        self.current.read().unwrap().is_some() || self.marker.get().is_some()
    }
}

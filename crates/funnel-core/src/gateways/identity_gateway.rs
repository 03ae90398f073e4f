//! Identity gateway trait (port)

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::AuthUser;
use crate::error::DomainError;

/// Port for the upstream identity provider.
///
/// `subscribe` returns the provider's identity-change stream. The channel
/// holds the latest identity, so a new subscriber observes the current
/// session immediately (the "fires once on startup" notification) and every
/// change after that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, DomainError>;
    async fn sign_out(&self) -> Result<(), DomainError>;
    fn subscribe(&self) -> watch::Receiver<Option<AuthUser>>;
}

//! `IdentityGateway` adapter over the Firebase Auth REST API.
//!
//! Besides the credential check itself, this adapter owns the
//! identity-change stream: a successful sign-in publishes the new identity,
//! a sign-out publishes `None`, and subscribers always observe the latest
//! value first. The provider keeps no server-side session here; sign-out is
//! a local token discard.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{error, warn};

use funnel_core::domain::AuthUser;
use funnel_core::error::DomainError;
use funnel_core::gateways::IdentityGateway;
use funnel_shared::config::FirebaseSettings;

pub struct FirebaseIdentity {
    client: Client,
    auth_url: String,
    api_key: String,
    tx: watch::Sender<Option<AuthUser>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
}

impl FirebaseIdentity {
    pub fn new(client: Client, settings: &FirebaseSettings) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            client,
            auth_url: settings.auth_url.clone(),
            api_key: settings.api_key.clone(),
            tx,
        }
    }
}

/// Error codes the sign-in endpoint uses for bad credentials.
const CREDENTIAL_ERRORS: [&str; 3] = [
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
];

#[async_trait]
impl IdentityGateway for FirebaseIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, DomainError> {
        let url = format!(
            "{}/accounts:signInWithPassword?key={}",
            self.auth_url, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| {
                error!("Identity provider unreachable: {}", e);
                DomainError::AuthError(e.to_string())
            })?;

        if response.status() == StatusCode::BAD_REQUEST {
            let body: Value = response.json().await.unwrap_or_default();
            let code = body["error"]["message"].as_str().unwrap_or_default();
            if CREDENTIAL_ERRORS.iter().any(|c| code.starts_with(c)) {
                warn!("Sign-in rejected: {}", code);
                return Err(DomainError::InvalidCredentials);
            }
            error!("Identity provider rejected sign-in: {}", code);
            return Err(DomainError::AuthError(code.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Identity provider error ({}): {}", status, body);
            return Err(DomainError::AuthError(format!("{}: {}", status, body)));
        }

        let body: SignInResponse = response.json().await.map_err(|e| {
            error!("Malformed sign-in response: {}", e);
            DomainError::AuthError(e.to_string())
        })?;

        let user = AuthUser {
            uid: body.local_id,
            email: body.email,
        };
        self.tx.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), DomainError> {
        self.tx.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.tx.subscribe()
    }
}

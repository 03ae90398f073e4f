//! `EmailGateway` adapter over the EmailJS send endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use funnel_core::error::DomainError;
use funnel_core::gateways::{DeliveryReceipt, EmailGateway, FeedbackEmail};
use funnel_shared::config::EmailJsSettings;
use funnel_shared::constants::EMAIL_NOT_PROVIDED;

pub struct EmailJsMailer {
    client: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    business_email: &'a str,
    message: &'a str,
    user_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    business_id: Option<&'a str>,
}

impl EmailJsMailer {
    pub fn new(client: Client, settings: &EmailJsSettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.public_key.clone(),
        }
    }
}

#[async_trait]
impl EmailGateway for EmailJsMailer {
    async fn send_feedback_notification(
        &self,
        email: &FeedbackEmail,
    ) -> Result<DeliveryReceipt, DomainError> {
        let url = format!("{}/api/v1.0/email/send", self.endpoint);
        debug!("Sending feedback notification to {}", email.business_email);

        let response = self
            .client
            .post(&url)
            .json(&SendRequest {
                service_id: &self.service_id,
                template_id: &self.template_id,
                user_id: &self.public_key,
                template_params: TemplateParams {
                    business_email: &email.business_email,
                    message: &email.message,
                    user_email: email.user_email.as_deref().unwrap_or(EMAIL_NOT_PROVIDED),
                    business_id: email.business_id.as_deref(),
                },
            })
            .send()
            .await
            .map_err(|e| DomainError::EmailError(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(DomainError::EmailError(format!("{}: {}", status, text)));
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer) -> EmailJsSettings {
        EmailJsSettings {
            endpoint: server.uri(),
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "public_1".to_string(),
        }
    }

    fn feedback_email(user_email: Option<&str>) -> FeedbackEmail {
        FeedbackEmail {
            business_email: "owner@x.com".to_string(),
            message: "too slow".to_string(),
            user_email: user_email.map(str::to_string),
            business_id: Some("b1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_send_returns_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_partial_json(json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "public_1",
                "template_params": {
                    "business_email": "owner@x.com",
                    "message": "too slow",
                    "user_email": "guest@mail.com",
                    "business_id": "b1"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&server)
            .await;

        let mailer = EmailJsMailer::new(Client::new(), &settings(&server));
        let receipt = mailer
            .send_feedback_notification(&feedback_email(Some("guest@mail.com")))
            .await
            .unwrap();
        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.text, "OK");
    }

    #[tokio::test]
    async fn test_absent_user_email_is_substituted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "template_params": { "user_email": "Not provided" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = EmailJsMailer::new(Client::new(), &settings(&server));
        mailer
            .send_feedback_notification(&feedback_email(None))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_transport_error_is_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let mailer = EmailJsMailer::new(Client::new(), &settings(&server));
        let err = mailer
            .send_feedback_notification(&feedback_email(None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailError(_)));
    }
}

//! `UploadGateway` adapter over the Cloudinary unsigned upload endpoint.
//!
//! Failure contract differs from every other adapter: any problem is
//! logged here and surfaces to the caller as `None`, never as an error.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::error;

use funnel_core::gateways::{UploadFile, UploadGateway};
use funnel_shared::config::CloudinarySettings;

pub struct CloudinaryUploader {
    client: Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryUploader {
    pub fn new(client: Client, settings: &CloudinarySettings) -> Self {
        Self {
            client,
            upload_url: settings.upload_url.clone(),
            upload_preset: settings.upload_preset.clone(),
        }
    }
}

#[async_trait]
impl UploadGateway for CloudinaryUploader {
    async fn upload(&self, file: UploadFile) -> Option<String> {
        let part = match Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.content_type)
        {
            Ok(part) => part,
            Err(e) => {
                error!("Rejected upload content type: {}", e);
                return None;
            }
        };
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = match self.client.post(&self.upload_url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Upload failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Upload endpoint error ({}): {}", status, body);
            return None;
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!("Malformed upload response: {}", e);
                return None;
            }
        };

        body["secure_url"].as_str().map(str::to_string)
    }
}

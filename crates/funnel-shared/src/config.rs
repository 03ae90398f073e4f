//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub firebase: FirebaseSettings,
    pub emailjs: EmailJsSettings,
    pub cloudinary: CloudinarySettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Firestore + Firebase Auth. Both REST endpoints are configurable so tests
/// can point them at a local stub.
#[derive(Debug, Deserialize, Clone)]
pub struct FirebaseSettings {
    pub api_key: String,
    pub project_id: String,
    pub auth_url: String,
    pub firestore_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsSettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CloudinarySettings {
    pub upload_url: String,
    pub upload_preset: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Where the durable logged-in marker lives between restarts.
    pub marker_path: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "funnel-server")?
            .set_default("firebase.auth_url", "https://identitytoolkit.googleapis.com/v1")?
            .set_default(
                "firebase.firestore_url",
                "https://firestore.googleapis.com/v1",
            )?
            .set_default("emailjs.endpoint", "https://api.emailjs.com")?
            .set_default("session.marker_path", ".funnel-session")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}

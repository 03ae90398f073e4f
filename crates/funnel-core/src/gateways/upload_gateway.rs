//! Upload gateway trait (port)

use async_trait::async_trait;

/// A binary file handed to the upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Port for the hosted image upload endpoint.
///
/// This is the one gateway that signals failure with a sentinel instead of
/// an error: `None` means the upload failed, and the adapter logs the cause.
/// Callers treat a missing URL as "no logo", not as a reason to abort.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadGateway: Send + Sync {
    async fn upload(&self, file: UploadFile) -> Option<String>;
}

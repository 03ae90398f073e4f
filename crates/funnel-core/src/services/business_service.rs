//! Business read path and creation flow

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{Business, NewBusiness};
use crate::error::DomainError;
use crate::gateways::{DocumentStore, UploadFile, UploadGateway};
use crate::services::BusinessDirectory;

pub struct BusinessService {
    store: Arc<dyn DocumentStore>,
    uploader: Arc<dyn UploadGateway>,
    directory: Arc<BusinessDirectory>,
}

impl BusinessService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        uploader: Arc<dyn UploadGateway>,
        directory: Arc<BusinessDirectory>,
    ) -> Self {
        Self {
            store,
            uploader,
            directory,
        }
    }

    /// Look up a business by id. `Ok(None)` means the document does not
    /// exist; transport and permission failures come back as errors.
    pub async fn get_business(&self, id: &str) -> Result<Option<Business>, DomainError> {
        self.store.find_business(id).await
    }

    /// Create a business record, uploading the logo first when one was
    /// provided. A failed upload leaves the logo unset and creation
    /// proceeds; the upload gateway already logged the cause.
    pub async fn create_business(
        &self,
        new: NewBusiness,
        logo: Option<UploadFile>,
    ) -> Result<Business, DomainError> {
        let logo_url = match logo {
            Some(file) => {
                let url = self.uploader.upload(file).await;
                if url.is_none() {
                    warn!("Logo upload failed, creating business without logo");
                }
                url
            }
            None => None,
        };

        let business = Business::new(new, logo_url)?;
        self.store.append_business(&business).await?;
        self.directory.add(business.clone());
        info!("Business created: {} ({})", business.name, business.id);
        Ok(business)
    }

    pub fn directory(&self) -> &BusinessDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::document_store::{DocumentRef, MockDocumentStore};
    use crate::gateways::upload_gateway::MockUploadGateway;

    fn payload() -> NewBusiness {
        NewBusiness {
            name: "Corner Cafe".to_string(),
            email: "owner@cornercafe.com".to_string(),
            review_profile_url: "https://g.page/r/corner-cafe/review".to_string(),
            primary_color: "#1a73e8".to_string(),
            secondary_color: "#ffffff".to_string(),
        }
    }

    fn logo() -> UploadFile {
        UploadFile {
            filename: "logo.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn business_ref(id: &str) -> DocumentRef {
        DocumentRef {
            collection: "businesses".to_string(),
            id: id.to_string(),
        }
    }

    fn service(
        store: MockDocumentStore,
        uploader: MockUploadGateway,
    ) -> (BusinessService, Arc<BusinessDirectory>) {
        let directory = Arc::new(BusinessDirectory::new());
        (
            BusinessService::new(Arc::new(store), Arc::new(uploader), directory.clone()),
            directory,
        )
    }

    #[tokio::test]
    async fn test_get_business_absent_is_not_an_error() {
        let mut store = MockDocumentStore::new();
        store.expect_find_business().returning(|_| Ok(None));

        let (service, _) = service(store, MockUploadGateway::new());
        assert!(service.get_business("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_business_transport_failure_is_an_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_business()
            .returning(|_| Err(DomainError::StoreError("timeout".to_string())));

        let (service, _) = service(store, MockUploadGateway::new());
        assert!(service.get_business("b1").await.is_err());
    }

    #[tokio::test]
    async fn test_create_business_with_logo() {
        let mut uploader = MockUploadGateway::new();
        uploader
            .expect_upload()
            .times(1)
            .returning(|_| Some("https://cdn.example.com/logo.png".to_string()));
        let mut store = MockDocumentStore::new();
        store
            .expect_append_business()
            .times(1)
            .withf(|b| b.logo_url.as_deref() == Some("https://cdn.example.com/logo.png"))
            .returning(|b| Ok(business_ref(&b.id)));

        let (service, directory) = service(store, uploader);
        let business = service.create_business(payload(), Some(logo())).await.unwrap();
        assert!(business.has_logo());
        assert_eq!(directory.all().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_upload_creates_business_without_logo() {
        let mut uploader = MockUploadGateway::new();
        uploader.expect_upload().returning(|_| None);
        let mut store = MockDocumentStore::new();
        store
            .expect_append_business()
            .withf(|b| b.logo_url.is_none())
            .returning(|b| Ok(business_ref(&b.id)));

        let (service, _) = service(store, uploader);
        let business = service.create_business(payload(), Some(logo())).await.unwrap();
        assert!(!business.has_logo());
    }
}

//! Gateway traits (ports)
//!
//! Narrow interfaces to the hosted collaborators. Adapters live in the
//! infrastructure crate; services only ever see these traits.

pub mod document_store;
pub mod email_gateway;
pub mod identity_gateway;
pub mod marker_store;
pub mod upload_gateway;

pub use document_store::{DocumentRef, DocumentStore};
pub use email_gateway::{DeliveryReceipt, EmailGateway, FeedbackEmail};
pub use identity_gateway::IdentityGateway;
pub use marker_store::MarkerStore;
pub use upload_gateway::{UploadFile, UploadGateway};

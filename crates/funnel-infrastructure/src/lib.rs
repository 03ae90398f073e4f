//! # Funnel Infrastructure
//!
//! Adapters for the hosted collaborators: the Firestore document store,
//! the Firebase identity provider, the EmailJS transactional mailer, the
//! Cloudinary upload endpoint, and the file-backed session marker.

pub mod cloudinary;
pub mod emailjs;
pub mod firebase_auth;
pub mod firestore;
pub mod marker;

pub use cloudinary::CloudinaryUploader;
pub use emailjs::EmailJsMailer;
pub use firebase_auth::FirebaseIdentity;
pub use firestore::FirestoreStore;
pub use marker::FileMarkerStore;

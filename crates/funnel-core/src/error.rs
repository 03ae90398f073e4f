//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Document store error: {0}")]
    StoreError(String),

    #[error("Email delivery error: {0}")]
    EmailError(String),

    #[error("Identity provider error: {0}")]
    AuthError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid recipient address
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    /// Send request is missing required content or carries malformed fields
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Inbound event could not be interpreted
    #[error("Malformed event: {0}")]
    MalformedEvent(String),
}

impl DomainError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }
}

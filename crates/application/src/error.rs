//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Provider or media host failure
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the caller sent something invalid, as opposed to a downstream failure
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_invalid_requests() {
        let err: ApplicationError = DomainError::invalid_request("missing text").into();
        assert!(err.is_invalid_request());
        assert_eq!(err.to_string(), "Invalid request: missing text");
    }

    #[test]
    fn external_errors_are_not_invalid_requests() {
        let err = ApplicationError::ExternalService("provider down".to_string());
        assert!(!err.is_invalid_request());
        assert_eq!(err.to_string(), "External service error: provider down");
    }
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required parameter is missing, empty, or malformed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

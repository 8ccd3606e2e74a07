//! Client error types

use thiserror::Error;

use edda_domain::DomainError;

use crate::ports::HttpClientError;

/// Errors surfaced to callers of the Edda service clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request parameter failed validation before dispatch.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// The HTTP transport failed.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// A response body could not be parsed into the expected view.
    #[error("failed to parse {url}")]
    Parse {
        /// URL whose response failed to parse.
        url: String,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

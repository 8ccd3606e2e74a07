//! HTTP client port

use std::future::Future;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Raw response produced by the HTTP transport.
///
/// Carries the time the request was issued alongside the undecoded body;
/// the client core is responsible for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Time at which the request was issued.
    pub start_time: DateTime<Utc>,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub const fn new(start_time: DateTime<Utc>, body: Vec<u8>) -> Self {
        Self { start_time, body }
    }
}

/// Errors surfaced by the HTTP transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The host could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error message.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
        /// Port that refused the connection.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// The configured redirect limit.
        max: u32,
    },

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// URL that produced the status.
        url: String,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for issuing HTTP GET requests.
///
/// All work is deferred to the implementation; the client logic adds no
/// locking, caching, retries, or cancellation on top.
pub trait HttpClient: Send + Sync {
    /// Issues a GET request and returns the raw body together with the
    /// time the request was issued.
    ///
    /// # Errors
    ///
    /// Returns an `HttpClientError` describing the transport failure.
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, HttpClientError>> + Send;
}

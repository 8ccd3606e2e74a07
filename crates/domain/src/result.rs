//! Service result envelopes
//!
//! Wrappers that pair a deserialized payload with the timestamp at which
//! the originating request was issued. These are the shapes the calling
//! SDK expects; the payload inside is one of the `elb::api` result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a service call against a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResult<T> {
    /// Time at which the originating request was issued.
    pub start_time: DateTime<Utc>,
    /// The deserialized payload.
    pub result: T,
}

impl<T> ServiceResult<T> {
    /// Creates a new `ServiceResult`.
    #[must_use]
    pub const fn new(start_time: DateTime<Utc>, result: T) -> Self {
        Self { start_time, result }
    }
}

/// Result of a service call scoped to a named resource.
///
/// Fetch-all operations return one of these per resource, keyed by the
/// resource name reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedServiceResult<T> {
    /// Time at which the originating request was issued.
    pub start_time: DateTime<Utc>,
    /// Name of the resource this result describes.
    pub name: String,
    /// The deserialized payload.
    pub result: T,
}

impl<T> NamedServiceResult<T> {
    /// Creates a new `NamedServiceResult`.
    #[must_use]
    pub fn new(start_time: DateTime<Utc>, name: impl Into<String>, result: T) -> Self {
        Self {
            start_time,
            name: name.into(),
            result,
        }
    }
}

/// Result of a service call that may span multiple pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedServiceResult<T> {
    /// Time at which the originating request was issued.
    pub start_time: DateTime<Utc>,
    /// Token for fetching the next page, if there is one.
    pub next_token: Option<String>,
    /// The deserialized payload.
    pub result: T,
}

impl<T> PaginatedServiceResult<T> {
    /// Creates a new `PaginatedServiceResult`.
    #[must_use]
    pub const fn new(start_time: DateTime<Utc>, next_token: Option<String>, result: T) -> Self {
        Self {
            start_time,
            next_token,
            result,
        }
    }
}

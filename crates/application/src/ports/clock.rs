//! Clock port for time-related operations

use chrono::{DateTime, Utc};

/// Port for reading the current time.
///
/// Lets transport adapters stamp request start times with a clock that
/// tests can replace.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

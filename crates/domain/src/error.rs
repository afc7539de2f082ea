//! Error taxonomy for loading profile data.
//!
//! A user missing from a well-formed mapping is **not** an error; see
//! [`UserLookup::NotFound`](crate::profile::UserLookup::NotFound).

use std::time::Duration;

/// Boxed transport-level cause, kept opaque so the domain stays IO-free.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a profile fetch can fail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not complete (connection refused, reset, DNS, …).
    #[error("request could not complete")]
    Network(#[source] BoxError),

    /// No response arrived within the configured bound.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// A 2xx response whose body lacks `profiles` or has the wrong shape.
    #[error("malformed profiles response")]
    MalformedResponse(#[source] serde_json::Error),
}

impl FetchError {
    /// Wrap any transport error as [`FetchError::Network`].
    pub fn network(err: impl Into<BoxError>) -> Self {
        Self::Network(err.into())
    }

    /// Whether the failure was caused by the request bound expiring.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

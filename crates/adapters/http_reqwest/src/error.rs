//! Construction errors for the reqwest client.

/// Errors raised while building a [`ReqwestApiClient`](crate::ReqwestApiClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying reqwest client could not be built (e.g. TLS backend).
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The base URL cannot have paths joined onto it (e.g. `mailto:`).
    #[error("base URL cannot be used as an API root: {0}")]
    InvalidBaseUrl(url::Url),
}

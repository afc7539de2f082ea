//! API client port: the HTTP collaborator the views fetch through.

use std::future::Future;
use std::sync::Arc;

use driftdash_domain::error::FetchError;

/// Raw answer from the profile API, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues `GET` requests against the profile API.
///
/// Only failures to obtain a response at all are errors here. Status codes
/// and bodies are interpreted by the caller, so a fake implementation only
/// needs to hand back canned [`ApiResponse`]s.
pub trait ApiClient: Send + Sync {
    /// Fetch `path` (e.g. `/profiles`) relative to the API root.
    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, FetchError>> + Send;
}

impl<C: ApiClient> ApiClient for &C {
    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, FetchError>> + Send {
        (**self).get(path)
    }
}

impl<C: ApiClient> ApiClient for Arc<C> {
    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, FetchError>> + Send {
        (**self).get(path)
    }
}

//! Hand-written fake of the [`ApiClient`] port shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use driftdash_domain::error::FetchError;

use crate::ports::{ApiClient, ApiResponse};

/// What the fake answers to every request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with the given status and body.
    Respond(u16, &'static str),
    /// Fail as if the connection was refused.
    Refuse,
    /// Never answer.
    Hang,
}

pub struct FakeClient {
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeClient {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(body: &'static str) -> Self {
        Self::new(Reply::Respond(200, body))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ApiClient for FakeClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, FetchError> {
        assert_eq!(path, "/profiles");
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Respond(status, body) => Ok(ApiResponse::new(status, body)),
            Reply::Refuse => Err(FetchError::network(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            Reply::Hang => std::future::pending().await,
        }
    }
}

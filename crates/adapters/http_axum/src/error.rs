//! HTTP error response mapping for the dashboard.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A page could not be produced at all (as opposed to a page reporting a
/// failed fetch, which still renders).
#[derive(Debug)]
pub enum DashboardError {
    /// An askama template failed to render.
    Render(askama::Error),
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::Render(err) => {
                tracing::error!(error = %err, "template render error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

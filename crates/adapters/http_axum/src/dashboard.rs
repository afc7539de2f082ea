//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod user;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;

use driftdash_app::ports::ApiClient;

use crate::error::DashboardError;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: ApiClient + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/users", get(users::list::<C>))
        .route("/user/", get(user::detail::<C>))
        .route("/user/{user_id}", get(user::detail::<C>))
}

/// `GET /`: the user list is the landing page.
async fn index() -> Redirect {
    Redirect::to("/users")
}

/// CSS class for a page's status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice",
            Self::Error => "notice error",
        }
    }
}

fn render(status: StatusCode, template: &impl Template) -> Result<Response, DashboardError> {
    let html = template.render()?;
    Ok((status, Html(html)).into_response())
}

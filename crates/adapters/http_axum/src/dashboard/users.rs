//! Dashboard page listing every user.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use driftdash_app::ports::ApiClient;
use driftdash_app::views::{ListPage, ProfileListView, ProfileRow};

use super::{NoticeKind, render};
use crate::error::DashboardError;
use crate::state::AppState;

/// User list page template.
#[derive(Template)]
#[template(path = "user_list.html")]
pub struct UserListTemplate {
    notice: &'static str,
    notice_class: &'static str,
    reason: String,
    rows: Vec<ProfileRow>,
}

impl UserListTemplate {
    fn from_page(page: ListPage) -> Self {
        let notice = page.notice().unwrap_or_default();
        let kind = match page {
            ListPage::Failed { .. } => NoticeKind::Error,
            _ => NoticeKind::Info,
        };
        let (reason, rows) = match page {
            ListPage::Failed { reason } => (reason, Vec::new()),
            ListPage::Rows(rows) => (String::new(), rows),
            ListPage::Loading | ListPage::Empty => (String::new(), Vec::new()),
        };
        Self {
            notice,
            notice_class: kind.css_class(),
            reason,
            rows,
        }
    }
}

/// `GET /users`: list all users with their event counts.
pub async fn list<C>(State(state): State<AppState<C>>) -> Result<Response, DashboardError>
where
    C: ApiClient + 'static,
{
    let mut view = ProfileListView::new(&*state.client, state.settings);
    view.mount().await;
    let page = view.page();

    let status = match page {
        ListPage::Failed { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    render(status, &UserListTemplate::from_page(page))
}

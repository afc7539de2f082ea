//! Dashboard page for a single user.

use askama::Template;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use driftdash_app::ports::ApiClient;
use driftdash_app::routing::resolve_user_path;
use driftdash_app::views::{DetailPage, ProfileDetailView};
use driftdash_domain::id::UserId;

use super::{NoticeKind, render};
use crate::error::DashboardError;
use crate::state::AppState;

/// User detail page template.
#[derive(Template)]
#[template(path = "user_detail.html")]
pub struct UserDetailTemplate {
    user_id: UserId,
    notice: &'static str,
    notice_class: &'static str,
    reason: String,
    found: bool,
    count: u64,
}

impl UserDetailTemplate {
    fn from_page(page: DetailPage) -> Self {
        let notice = page.notice().unwrap_or_default();
        let (user_id, kind, reason, count) = match page {
            DetailPage::Found { user_id, count } => {
                (user_id, NoticeKind::Info, String::new(), Some(count))
            }
            DetailPage::Failed { user_id, reason } => (user_id, NoticeKind::Error, reason, None),
            DetailPage::NotFound { user_id } | DetailPage::Loading { user_id } => {
                (user_id, NoticeKind::Info, String::new(), None)
            }
        };
        Self {
            user_id,
            notice,
            notice_class: kind.css_class(),
            reason,
            found: count.is_some(),
            count: count.unwrap_or_default(),
        }
    }
}

/// `GET /user/{user_id}`: one user's event count.
///
/// The id is resolved from the raw request path so that encoded slashes and
/// the empty segment reach the view unchanged.
pub async fn detail<C>(
    State(state): State<AppState<C>>,
    uri: Uri,
) -> Result<Response, DashboardError>
where
    C: ApiClient + 'static,
{
    let Some(user_id) = resolve_user_path(uri.path()) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let mut view = ProfileDetailView::new(&*state.client, state.settings, user_id);
    view.mount().await;
    let page = view.page();

    let status = match page {
        DetailPage::Found { .. } | DetailPage::Loading { .. } => StatusCode::OK,
        DetailPage::NotFound { .. } => StatusCode::NOT_FOUND,
        DetailPage::Failed { .. } => StatusCode::BAD_GATEWAY,
    };
    render(status, &UserDetailTemplate::from_page(page))
}

//! List view: every known user with their event count.

use driftdash_domain::error::FetchError;
use driftdash_domain::id::UserId;
use driftdash_domain::load_state::LoadState;
use driftdash_domain::profile::ProfileMapping;

use super::{LOAD_FAILED, LOADING_USERS, NO_USERS, ViewSettings};
use crate::loader::{Generation, LoadTicket};
use crate::ports::ApiClient;
use crate::profiles::fetch_profiles;
use crate::routing::user_path;

/// One navigable row of the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub user_id: UserId,
    pub count: u64,
    href: Option<String>,
}

impl ProfileRow {
    fn new(user_id: &UserId, count: u64) -> Self {
        Self {
            href: user_path(user_id),
            user_id: user_id.clone(),
            count,
        }
    }

    /// Detail page path for this user; `None` when no link can reach it.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Text of the row, e.g. `alice — 3 events`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} \u{2014} {} events", self.user_id, self.count)
    }
}

/// What the list page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPage {
    Loading,
    /// The request failed; `reason` is diagnostic detail.
    Failed { reason: String },
    /// The mapping was fetched and has no users.
    Empty,
    /// One row per user, in response order.
    Rows(Vec<ProfileRow>),
}

impl ListPage {
    /// Status line for the page, if it has one.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_USERS),
            Self::Failed { .. } => Some(LOAD_FAILED),
            Self::Empty => Some(NO_USERS),
            Self::Rows(_) => None,
        }
    }

    /// Rows to render; empty unless the mapping loaded with users.
    #[must_use]
    pub fn rows(&self) -> &[ProfileRow] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// View listing every user in the profile mapping.
pub struct ProfileListView<C> {
    client: C,
    settings: ViewSettings,
    generation: Generation,
    state: LoadState<ProfileMapping>,
}

impl<C: ApiClient> ProfileListView<C> {
    pub fn new(client: C, settings: ViewSettings) -> Self {
        Self {
            client,
            settings,
            generation: Generation::default(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState<ProfileMapping> {
        &self.state
    }

    /// Enter `Loading` and issue the ticket the eventual result must carry.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = LoadState::Loading;
        self.generation.issue()
    }

    /// Settle the request identified by `ticket`.
    ///
    /// Returns `false`, leaving state untouched, when the ticket was
    /// superseded or revoked by [`unmount`](Self::unmount).
    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<ProfileMapping, FetchError>,
    ) -> bool {
        if !self.generation.settle(ticket) {
            tracing::debug!(?ticket, "discarding stale profile list result");
            return false;
        }
        self.state = match result {
            Ok(mapping) => {
                tracing::debug!(users = mapping.len(), "profile list loaded");
                LoadState::Loaded(mapping)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed loading profiles");
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Fetch the mapping once and settle the view with the outcome.
    pub async fn mount(&mut self) {
        let ticket = self.begin_load();
        let result = fetch_profiles(&self.client, self.settings.request_timeout).await;
        self.apply(ticket, result);
    }

    /// Detach the view; any in-flight result is dropped when it arrives.
    pub fn unmount(&mut self) {
        self.generation.revoke();
    }

    /// Presentation model for the current state.
    #[must_use]
    pub fn page(&self) -> ListPage {
        match &self.state {
            LoadState::Idle | LoadState::Loading => ListPage::Loading,
            LoadState::Failed(err) => ListPage::Failed {
                reason: err.to_string(),
            },
            LoadState::Loaded(mapping) if mapping.is_empty() => ListPage::Empty,
            LoadState::Loaded(mapping) => ListPage::Rows(
                mapping
                    .iter()
                    .map(|(user_id, count)| ProfileRow::new(user_id, count))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeClient, Reply};

    fn view(client: &FakeClient) -> ProfileListView<&FakeClient> {
        ProfileListView::new(client, ViewSettings::default())
    }

    #[tokio::test]
    async fn should_render_one_row_per_user() {
        let client = FakeClient::ok(r#"{"profiles":{"alice":3,"bob":0}}"#);
        let mut view = view(&client);
        view.mount().await;

        let page = view.page();
        let labels: Vec<String> = page.rows().iter().map(ProfileRow::label).collect();
        assert_eq!(labels, vec!["alice \u{2014} 3 events", "bob \u{2014} 0 events"]);
        assert_eq!(page.rows()[0].href(), Some("/user/alice"));
        assert!(page.notice().is_none());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn should_keep_unlinkable_users_as_plain_rows() {
        let client = FakeClient::ok(r#"{"profiles":{".":1,"..":2,"alice":3}}"#);
        let mut view = view(&client);
        view.mount().await;

        let page = view.page();
        let hrefs: Vec<Option<&str>> = page.rows().iter().map(ProfileRow::href).collect();
        assert_eq!(hrefs, vec![None, None, Some("/user/alice")]);
        assert_eq!(page.rows()[1].label(), ".. \u{2014} 2 events");
    }

    #[tokio::test]
    async fn should_show_empty_state_for_empty_mapping() {
        let client = FakeClient::ok(r#"{"profiles":{}}"#);
        let mut view = view(&client);
        view.mount().await;

        let page = view.page();
        assert_eq!(page, ListPage::Empty);
        assert!(page.rows().is_empty());
        assert_eq!(page.notice(), Some(NO_USERS));
    }

    #[tokio::test]
    async fn should_fail_on_network_error_without_rows() {
        let client = FakeClient::new(Reply::Refuse);
        let mut view = view(&client);
        view.mount().await;

        assert!(matches!(view.state(), LoadState::Failed(FetchError::Network(_))));
        let page = view.page();
        assert!(matches!(page, ListPage::Failed { .. }));
        assert_eq!(page.notice(), Some(LOAD_FAILED));
        assert!(page.rows().is_empty());
    }

    #[tokio::test]
    async fn should_fail_on_error_status() {
        let client = FakeClient::new(Reply::Respond(502, "bad gateway"));
        let mut view = view(&client);
        view.mount().await;

        assert!(matches!(
            view.state(),
            LoadState::Failed(FetchError::UnexpectedStatus(502))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn should_fail_instead_of_loading_forever() {
        let client = FakeClient::new(Reply::Hang);
        let mut view = view(&client);
        view.mount().await;

        assert!(view.state().error().is_some_and(FetchError::is_timeout));
        assert_ne!(view.page(), ListPage::Loading);
    }

    #[tokio::test]
    async fn should_render_identically_on_repeated_mounts() {
        let client = FakeClient::ok(r#"{"profiles":{"zed":1,"alice":3}}"#);
        let mut view = view(&client);
        view.mount().await;
        let first = view.page();
        view.mount().await;
        assert_eq!(view.page(), first);
        assert_eq!(client.calls(), 2);
    }

    #[test]
    fn should_show_loading_before_settling() {
        let client = FakeClient::ok(r#"{"profiles":{}}"#);
        let mut view = view(&client);
        assert_eq!(view.page(), ListPage::Loading);
        view.begin_load();
        assert!(view.state().is_loading());
        assert_eq!(view.page().notice(), Some(LOADING_USERS));
    }

    #[test]
    fn should_drop_result_of_superseded_request() {
        let client = FakeClient::ok(r#"{"profiles":{}}"#);
        let mut view = view(&client);
        let stale = view.begin_load();
        let current = view.begin_load();

        let old: ProfileMapping = [(UserId::from("old"), 1)].into_iter().collect();
        assert!(!view.apply(stale, Ok(old)));
        assert!(view.state().is_loading());

        assert!(view.apply(current, Ok(ProfileMapping::new())));
        assert_eq!(view.page(), ListPage::Empty);
    }

    #[test]
    fn should_drop_result_arriving_after_unmount() {
        let client = FakeClient::ok(r#"{"profiles":{}}"#);
        let mut view = view(&client);
        let ticket = view.begin_load();
        view.unmount();

        assert!(!view.apply(ticket, Err(FetchError::UnexpectedStatus(500))));
        assert!(view.state().is_loading());
    }

    #[test]
    fn should_ignore_second_result_for_settled_ticket() {
        let client = FakeClient::ok(r#"{"profiles":{}}"#);
        let mut view = view(&client);
        let ticket = view.begin_load();
        assert!(view.apply(ticket, Ok(ProfileMapping::new())));
        assert!(!view.apply(ticket, Err(FetchError::UnexpectedStatus(500))));
        assert_eq!(view.page(), ListPage::Empty);
    }
}

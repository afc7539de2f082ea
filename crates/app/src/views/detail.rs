//! Detail view: one user's event count.

use driftdash_domain::error::FetchError;
use driftdash_domain::id::UserId;
use driftdash_domain::load_state::LoadState;
use driftdash_domain::profile::{ProfileMapping, UserLookup};

use super::{LOAD_FAILED, LOADING_USER, USER_NOT_FOUND, ViewSettings};
use crate::loader::{Generation, LoadTicket};
use crate::ports::ApiClient;
use crate::profiles::fetch_profiles;

/// What the detail page shows. Every variant names the requested user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPage {
    Loading { user_id: UserId },
    Found { user_id: UserId, count: u64 },
    /// The mapping loaded but does not contain the user.
    NotFound { user_id: UserId },
    /// The request failed; nothing is known about the user.
    Failed { user_id: UserId, reason: String },
}

impl DetailPage {
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Loading { user_id }
            | Self::Found { user_id, .. }
            | Self::NotFound { user_id }
            | Self::Failed { user_id, .. } => user_id,
        }
    }

    /// The event count, only when the user was found.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Found { count, .. } => Some(*count),
            _ => None,
        }
    }

    /// Status line for the page, if it has one.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Loading { .. } => Some(LOADING_USER),
            Self::Found { .. } => None,
            Self::NotFound { .. } => Some(USER_NOT_FOUND),
            Self::Failed { .. } => Some(LOAD_FAILED),
        }
    }
}

/// View showing the event count of a single user.
///
/// The whole mapping is fetched and the user looked up locally; the endpoint
/// has no per-user variant.
pub struct ProfileDetailView<C> {
    client: C,
    settings: ViewSettings,
    user_id: UserId,
    mounted: bool,
    generation: Generation,
    state: LoadState<UserLookup>,
}

impl<C: ApiClient> ProfileDetailView<C> {
    pub fn new(client: C, settings: ViewSettings, user_id: UserId) -> Self {
        Self {
            client,
            settings,
            user_id,
            mounted: false,
            generation: Generation::default(),
            state: LoadState::Idle,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn state(&self) -> &LoadState<UserLookup> {
        &self.state
    }

    /// Enter `Loading` for the current user id and issue a ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.mounted = true;
        self.state = LoadState::Loading;
        self.generation.issue()
    }

    /// Point the view at another user.
    ///
    /// On a mounted view a different id restarts loading and returns the new
    /// ticket; the previous request can no longer settle the view. The same
    /// id, or an unmounted view, yields `None`.
    pub fn set_user_id(&mut self, user_id: UserId) -> Option<LoadTicket> {
        if self.user_id == user_id {
            return None;
        }
        self.user_id = user_id;
        if self.mounted {
            Some(self.begin_load())
        } else {
            self.state = LoadState::Idle;
            None
        }
    }

    /// Settle the request identified by `ticket`, looking the current user up
    /// in the fetched mapping.
    ///
    /// Returns `false`, leaving state untouched, for a superseded or revoked
    /// ticket.
    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<ProfileMapping, FetchError>,
    ) -> bool {
        if !self.generation.settle(ticket) {
            tracing::debug!(?ticket, user_id = %self.user_id, "discarding stale profile result");
            return false;
        }
        self.state = match result {
            Ok(mapping) => {
                let lookup = mapping.lookup(&self.user_id);
                if lookup == UserLookup::NotFound {
                    tracing::info!(user_id = %self.user_id, "user not found in profiles");
                }
                LoadState::Loaded(lookup)
            }
            Err(err) => {
                tracing::warn!(user_id = %self.user_id, error = %err, "failed loading profiles");
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Fetch the mapping once for the current user and settle the view.
    pub async fn mount(&mut self) {
        let ticket = self.begin_load();
        self.load(ticket).await;
    }

    /// Switch to `user_id` and, if that restarted loading, fetch again.
    pub async fn navigate(&mut self, user_id: UserId) {
        if let Some(ticket) = self.set_user_id(user_id) {
            self.load(ticket).await;
        }
    }

    async fn load(&mut self, ticket: LoadTicket) {
        let result = fetch_profiles(&self.client, self.settings.request_timeout).await;
        self.apply(ticket, result);
    }

    /// Detach the view; any in-flight result is dropped when it arrives.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation.revoke();
    }

    /// Presentation model for the current state.
    #[must_use]
    pub fn page(&self) -> DetailPage {
        let user_id = self.user_id.clone();
        match &self.state {
            LoadState::Idle | LoadState::Loading => DetailPage::Loading { user_id },
            LoadState::Loaded(UserLookup::Found(count)) => DetailPage::Found {
                user_id,
                count: *count,
            },
            LoadState::Loaded(UserLookup::NotFound) => DetailPage::NotFound { user_id },
            LoadState::Failed(err) => DetailPage::Failed {
                user_id,
                reason: err.to_string(),
            },
        }
    }
}

//! Shared application state for axum handlers.

use std::sync::Arc;

use driftdash_app::ports::ApiClient;
use driftdash_app::views::ViewSettings;

/// Application state shared across all axum handlers.
///
/// Generic over the API client to avoid dynamic dispatch. `Clone` is
/// implemented manually so the client itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Client used by every view to reach the profile API.
    pub client: Arc<C>,
    /// Settings handed to each mounted view.
    pub settings: ViewSettings,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            settings: self.settings,
        }
    }
}

impl<C> AppState<C>
where
    C: ApiClient + 'static,
{
    /// Create a new application state owning `client`.
    pub fn new(client: C, settings: ViewSettings) -> Self {
        Self::from_arc(Arc::new(client), settings)
    }

    /// Create a new application state from a pre-wrapped client.
    ///
    /// Use this when the client is shared with something other than the
    /// HTTP layer.
    pub fn from_arc(client: Arc<C>, settings: ViewSettings) -> Self {
        Self { client, settings }
    }
}

//! Fetch-bound views over the profile mapping.
//!
//! A view owns its [`LoadState`](driftdash_domain::load_state::LoadState)
//! and turns it into a presentation model (`ListPage`, `DetailPage`) that
//! adapters render. Views are cheap: adapters create one per mount.

pub mod detail;
pub mod list;

use std::time::Duration;

pub use detail::{DetailPage, ProfileDetailView};
pub use list::{ListPage, ProfileListView, ProfileRow};

/// Shown by the list view while its request is pending.
pub const LOADING_USERS: &str = "Loading users\u{2026}";
/// Shown by the detail view while its request is pending.
pub const LOADING_USER: &str = "Loading user\u{2026}";
/// Shown by the list view for an empty mapping.
pub const NO_USERS: &str = "No users found";
/// Shown by the detail view when the mapping lacks the requested user.
pub const USER_NOT_FOUND: &str = "User not found";
/// Shown by either view when the request failed.
pub const LOAD_FAILED: &str = "Failed to load data";

/// Knobs shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Upper bound on a single `/profiles` request.
    pub request_timeout: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
        }
    }
}

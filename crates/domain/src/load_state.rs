//! Lifecycle of a single fetch-bound view.
//!
//! ```text
//! Idle -> Loading            (mount)
//! Loading -> Loaded(data)    (response parsed)
//! Loading -> Failed(error)   (transport error, timeout, bad status or body)
//! ```
//!
//! `Loaded` and `Failed` are terminal until the view is mounted again.

use crate::error::FetchError;

/// Where a view is in its load lifecycle.
#[derive(Debug)]
pub enum LoadState<T> {
    /// Not mounted yet; nothing requested.
    Idle,
    /// A request is in flight.
    Loading,
    /// The request succeeded.
    Loaded(T),
    /// The request failed; the view shows an error instead of data.
    Failed(FetchError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the state can only change through a remount.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    /// The loaded value, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

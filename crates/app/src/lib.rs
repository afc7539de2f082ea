//! # driftdash-app
//!
//! Application layer: view models and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound port):
//!   - `ApiClient`: a single `get(path)` against the profile API
//! - Decode the `/profiles` response and bound every fetch with a timeout
//! - Provide the two **views** (driving side):
//!   - `ProfileListView`: every user with their event count
//!   - `ProfileDetailView`: one user's event count
//! - Guard view state against results from superseded requests
//! - Map user ids to and from `/user/{id}` navigation paths
//!
//! ## Dependency rule
//! Depends on `driftdash-domain` only (plus `tokio::time` for timeouts).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod loader;
pub mod ports;
pub mod profiles;
pub mod routing;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

//! # driftdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** with **zero JavaScript**:
//!   `/users` lists every user, `/user/{id}` shows one user's event count
//! - Mount one application view per request, await its single fetch, and
//!   render the resulting page model through askama templates
//! - Map page outcomes onto status codes (404 for unknown users, 502 when the
//!   profile API failed)
//!
//! ## Dependency rule
//! Depends on `driftdash-app` (for the `ApiClient` port and the views) and
//! `driftdash-domain` (for ids used in routing). Never leaks axum types
//! into the application layer.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

//! # driftdash-domain
//!
//! Pure domain model for the driftdash profile dashboard.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`UserId`](id::UserId), the fetch error taxonomy
//! - Define the **profile mapping** (user id → event count) and the wire
//!   envelope the `/profiles` endpoint returns
//! - Define the **load state** lifecycle shared by every fetch-bound view
//! - Define the **lookup outcome** for a single user (found vs. not found)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod load_state;
pub mod profile;

//! # driftdash-adapter-http-reqwest
//!
//! Driven adapter that talks to the profile API over HTTP with
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `ApiClient` port from `driftdash-app`
//! - Resolve request paths against a configurable base URL
//! - Map transport failures (refused, reset, timed out) onto `FetchError`
//!
//! Status codes and bodies are returned untouched; interpreting them is the
//! application layer's job.

mod client;
mod error;

pub use client::ReqwestApiClient;
pub use error::ClientError;

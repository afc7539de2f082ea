//! Fetching and decoding the `/profiles` resource.

use std::time::Duration;

use driftdash_domain::error::FetchError;
use driftdash_domain::profile::{ProfileMapping, ProfilesEnvelope};

use crate::ports::{ApiClient, ApiResponse};

/// Path of the profile mapping endpoint, relative to the API root.
pub const PROFILES_PATH: &str = "/profiles";

/// Interpret a raw `/profiles` response.
///
/// # Errors
///
/// Returns [`FetchError::UnexpectedStatus`] for a non-2xx status and
/// [`FetchError::MalformedResponse`] when the body is not
/// `{ "profiles": { "<user>": <count> } }`.
pub fn decode(response: &ApiResponse) -> Result<ProfileMapping, FetchError> {
    if !response.is_success() {
        return Err(FetchError::UnexpectedStatus(response.status));
    }
    let envelope: ProfilesEnvelope =
        serde_json::from_slice(&response.body).map_err(FetchError::MalformedResponse)?;
    Ok(envelope.profiles)
}

/// Issue one `GET /profiles` and decode it, giving up after `timeout`.
///
/// # Errors
///
/// Returns [`FetchError::Timeout`] when no response arrives in time, the
/// client's transport error, or a decoding error from [`decode`].
pub async fn fetch_profiles<C: ApiClient>(
    client: &C,
    timeout: Duration,
) -> Result<ProfileMapping, FetchError> {
    let response = tokio::time::timeout(timeout, client.get(PROFILES_PATH))
        .await
        .map_err(|_elapsed| FetchError::Timeout(timeout))??;
    decode(&response)
}

//! [`ApiClient`] implementation backed by a shared `reqwest::Client`.

use std::time::Duration;

use driftdash_app::ports::{ApiClient, ApiResponse};
use driftdash_domain::error::FetchError;
use url::Url;

use crate::error::ClientError;

/// HTTP client for the profile API rooted at `base_url`.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    base_url: Url,
    timeout: Duration,
    http: reqwest::Client,
}

impl ReqwestApiClient {
    /// Build a client whose requests are bounded by `timeout`.
    ///
    /// A base URL with a path prefix (`http://host/api`) keeps that prefix:
    /// `get("/profiles")` requests `http://host/api/profiles`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] for URLs that cannot carry a
    /// path and [`ClientError::Build`] if reqwest cannot initialise.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::network(err)
        }
    }
}

impl ApiClient for ReqwestApiClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, FetchError> {
        let url = self.endpoint(path).map_err(FetchError::network)?;
        tracing::debug!(%url, "requesting upstream");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;

        tracing::debug!(%url, status, bytes = body.len(), "upstream responded");
        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    async fn serve(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    fn client(base: &str) -> ReqwestApiClient {
        ReqwestApiClient::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn should_join_path_onto_bare_host() {
        let client = client("http://engine:8080");
        assert_eq!(
            client.endpoint("/profiles").unwrap().as_str(),
            "http://engine:8080/profiles"
        );
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let client = client("http://engine:8080/api");
        assert_eq!(client.base_url().as_str(), "http://engine:8080/api/");
        assert_eq!(
            client.endpoint("/profiles").unwrap().as_str(),
            "http://engine:8080/api/profiles"
        );
    }

    #[test]
    fn should_reject_base_url_without_path_support() {
        let result = ReqwestApiClient::new(
            Url::parse("mailto:ops@example.com").unwrap(),
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn should_return_status_and_body() {
        let app = Router::new().route("/profiles", get(|| async { r#"{"profiles":{"alice":3}}"# }));
        let base = serve(app).await;
        let client = ReqwestApiClient::new(base, Duration::from_secs(5)).unwrap();

        let response = client.get("/profiles").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"profiles":{"alice":3}}"#.to_vec());
    }

    #[tokio::test]
    async fn should_pass_error_status_through() {
        let app = Router::new().route(
            "/profiles",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(app).await;
        let client = ReqwestApiClient::new(base, Duration::from_secs(5)).unwrap();

        let response = client.get("/profiles").await.unwrap();
        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn should_map_refused_connection_to_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client(&format!("http://{addr}"));

        let result = client.get("/profiles").await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn should_map_slow_response_to_timeout() {
        let app = Router::new().route(
            "/profiles",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let base = serve(app).await;
        let client = ReqwestApiClient::new(base, Duration::from_millis(100)).unwrap();

        let result = client.get("/profiles").await;
        assert!(
            matches!(result, Err(FetchError::Timeout(d)) if d == Duration::from_millis(100))
        );
    }
}

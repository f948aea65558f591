//! Control plane HTTP client

use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::time::Duration;

use crate::config::CfConfig;
use crate::error::Result;

/// Control plane API client
///
/// Holds the immutable run configuration; safe to share by reference across
/// concurrent fetches.
pub struct CfClient {
    client: Client,
    config: CfConfig,
}

impl CfClient {
    /// Create a new client with pooled connections
    pub fn new(config: CfConfig) -> Self {
        let mut builder = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60));

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Absolute URL for an API path: base URL and path concatenated as-is
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Create a GET request builder with the Authorization header
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(AUTHORIZATION, self.config.token())
    }

    /// GET `path` and return the raw body
    ///
    /// The status code is not inspected; callers judge the body.
    pub async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
impl CfClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(CfConfig::new(base_url, "bearer test-token").unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::CfError;

    #[test]
    fn test_url_concatenates_verbatim() {
        let client = CfClient::new(CfConfig::new("https://api.example.com", "t").unwrap());
        assert_eq!(
            client.url("/v2/spaces"),
            "https://api.example.com/v2/spaces"
        );
    }

    #[test]
    fn test_url_does_not_normalize_slashes() {
        let client = CfClient::new(CfConfig::new("https://api.example.com/", "t").unwrap());
        assert_eq!(
            client.url("/v2/spaces"),
            "https://api.example.com//v2/spaces"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_token_verbatim() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/spaces"))
            .and(header("Authorization", "bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"resources\":[]}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client.fetch("/v2/spaces").await.unwrap();
        assert_eq!(body, b"{\"resources\":[]}");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_for_error_status() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/spaces"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid Auth Token"))
            .mount(&mock_server)
            .await;

        let body = client.fetch("/v2/spaces").await.unwrap();
        assert_eq!(body, b"Invalid Auth Token");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_http_error() {
        // Grab a free port, then close the listener so nothing answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CfClient::test_client(&format!("http://{}", addr));
        let result = client.fetch("/v2/spaces").await;

        match result {
            Err(CfError::Http(_)) => {}
            other => panic!("Expected CfError::Http, got {:?}", other.map(|b| b.len())),
        }
    }

    #[tokio::test]
    async fn test_fetch_times_out_when_configured() {
        let mock_server = MockServer::start().await;
        let config = CfConfig::new(mock_server.uri(), "t")
            .unwrap()
            .with_timeout(Some(Duration::from_millis(100)));
        let client = CfClient::new(config);

        Mock::given(method("GET"))
            .and(path("/v2/spaces"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let result = client.fetch("/v2/spaces").await;
        assert!(matches!(result, Err(CfError::Http(_))));
    }
}

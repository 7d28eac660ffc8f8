//! HTTP client for remote datasets.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::LoadError;

/// Thin wrapper around a configured reqwest client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with a user agent and request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }

    /// GET a URL and return the body. Non-success statuses are errors.
    pub async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        debug!("GET {}", url);
        let http_err = |source| LoadError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(http_err)
    }
}

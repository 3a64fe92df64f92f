use async_trait::async_trait;

use crate::core::errors::{ConfigError, Result};
use crate::core::traits::fetcher::ConfigFetcher;

/// Fetches remote documents over HTTP(S) with reqwest.
///
/// No timeout is set beyond the client defaults.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with an `envconf/<version>` user agent.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("envconf/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::FetchFailed {
                url: String::new(),
                reason: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ConfigFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ConfigError::FetchFailed {
                url: url.to_string(),
                reason: format!("request failed: {e}"),
            })?;

        if !resp.status().is_success() {
            return Err(ConfigError::FetchFailed {
                url: url.to_string(),
                reason: format!("server returned status {}", resp.status()),
            });
        }

        resp.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ConfigError::FetchFailed {
                url: url.to_string(),
                reason: format!("failed to read response body: {e}"),
            })
    }
}

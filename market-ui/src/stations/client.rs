//! HTTP client for the station search endpoint.

use std::time::Duration;

use tracing::debug;

use super::StationSearch;
use super::error::StationError;
use super::types::Station;

/// Default base URL: the trade page's own server.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the search endpoint, relative to the base URL.
const SEARCH_PATH: &str = "/search_station/";

/// Configuration for the station search client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Base URL of the server hosting `/search_station/`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for `GET /search_station/?query=...`.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    search_url: String,
}

impl StationClient {
    /// Create a new station search client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let search_url = format!("{}{}", config.base_url.trim_end_matches('/'), SEARCH_PATH);

        Ok(Self { http, search_url })
    }

    /// Full URL of the search endpoint (without query string).
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Search stations by name.
    pub async fn search_stations(&self, query: &str) -> Result<Vec<Station>, StationError> {
        debug!(query, "searching stations");

        let response = self
            .http
            .get(&self.search_url)
            .query(&[("query", query)])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| StationError::Json {
            message: e.to_string(),
        })
    }
}

impl StationSearch for StationClient {
    async fn search(&self, query: &str) -> Result<Vec<Station>, StationError> {
        self.search_stations(query).await
    }
}

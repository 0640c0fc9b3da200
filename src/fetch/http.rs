//! HTTP downloads.

use reqwest::blocking::Client;
use std::time::Duration;

use super::Fetcher;
use crate::error::{HarvesterError, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches task URLs over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

/// Response from fetching a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub content: String,
    /// `Date` header if present.
    pub server_date: Option<String>,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("harvester")
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let transport = |e: reqwest::Error| HarvesterError::FetchFailed {
            url: url.to_string(),
            status: None,
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();

        if !status.is_success() {
            return Err(HarvesterError::FetchFailed {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message: format!("HTTP {}", status),
            });
        }

        let server_date = response
            .headers()
            .get("date")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let content = response.text().map_err(transport)?;

        Ok(FetchResponse {
            status: status.as_u16(),
            content,
            server_date,
        })
    }
}

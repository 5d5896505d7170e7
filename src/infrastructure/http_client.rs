//! Blocking HTTP client for page fetching
//!
//! Fetching is strictly synchronous and sequential: each call blocks until
//! the response body is available or the request fails. There is no retry,
//! backoff or rate limiting here; callers that want resilience own that
//! policy themselves.

use anyhow::{Result, anyhow};
use reqwest::blocking::{Client, ClientBuilder};
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info};

use crate::infrastructure::config::defaults;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: defaults::USER_AGENT.to_string(),
            follow_redirects: true,
        }
    }
}

/// HTTP client wrapper that fetches pages and hands back parsed documents
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Fetch a URL and parse the body into an HTML document
    pub fn fetch_html(&self, url: &str) -> Result<Html> {
        let body = self.fetch_html_string(url)?;
        Ok(Html::parse_document(&body))
    }

    /// Fetch a URL and return the raw HTML body
    pub fn fetch_html_string(&self, url: &str) -> Result<String> {
        info!("HTTP GET: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error {}: {}", status, url));
        }

        let body = response
            .text()
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        if body.is_empty() {
            return Err(anyhow!("Empty response from {}", url));
        }

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Configured timeout, exposed for reporting
    pub fn timeout_seconds(&self) -> u64 {
        self.config.timeout_seconds
    }
}

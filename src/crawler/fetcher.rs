//! HTTP fetcher implementation
//!
//! This module handles all page requests for the harvest:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for catalog pages, paced by a [`Throttle`]
//! - Classifying failures so callers can skip and report them

use crate::config::{CrawlerConfig, SiteConfig};
use crate::crawler::throttle::Throttle;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Converts the result into the page body, or a human-readable failure reason
    pub fn into_body(self) -> Result<String, String> {
        match self {
            Self::Success { body, .. } => Ok(body),
            Self::HttpError { status_code } => Err(format!("HTTP {}", status_code)),
            Self::NetworkError { error } => Err(error),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// The same client serves catalog pages and the review API, so both carry
/// the configured user agent and per-request timeout.
///
/// # Example
///
/// ```no_run
/// use course_harvest::config::Config;
/// use course_harvest::crawler::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.site, &config.crawler).unwrap();
/// ```
pub fn build_http_client(
    site: &SiteConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(site.user_agent.clone())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx with readable body | Success |
/// | Any other HTTP status | HttpError |
/// | Timeout | NetworkError |
/// | Connection refused | NetworkError |
/// | Body read failure | NetworkError |
///
/// No retries are attempted.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Page fetcher that paces every request through a throttle
pub struct PageFetcher {
    client: Client,
    throttle: Throttle,
}

impl PageFetcher {
    pub fn new(client: Client, throttle: Throttle) -> Self {
        Self { client, throttle }
    }

    /// Waits for the throttle, then fetches `url`
    pub async fn get(&mut self, url: &str) -> FetchResult {
        self.throttle.wait().await;
        let result = fetch_url(&self.client, url).await;
        if let FetchResult::Success {
            final_url,
            status_code,
            ..
        } = &result
        {
            tracing::debug!("Fetched {} (HTTP {}, final URL {})", url, status_code, final_url);
        }
        result
    }
}

//! Compatibility table fetching.
//!
//! Provides an HTTP client for fetching the published compatibility table,
//! behind a trait so command logic can run against fixtures in tests.

use std::time::Duration;

use anyhow::Context;

use crate::compat::matrix::CompatTable;
use crate::error::{GlossaError, Result};

/// Fetches the published compatibility table.
pub trait CompatFetcher {
    /// Fetch and decode the table.
    fn fetch(&self) -> Result<CompatTable>;
}

/// Fetches the compatibility table over HTTP/HTTPS.
pub struct HttpCompatFetcher {
    client: reqwest::blocking::Client,
    url: String,
    timeout: Duration,
}

impl HttpCompatFetcher {
    /// Create a fetcher for the given URL with the default 30-second timeout.
    pub fn new(url: &str) -> Self {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("glossa")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url: url.to_string(),
            timeout,
        }
    }

    /// Get the table URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl CompatFetcher for HttpCompatFetcher {
    fn fetch(&self) -> Result<CompatTable> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Failed to fetch {}", self.url))?;

        if !response.status().is_success() {
            return Err(GlossaError::Fetch {
                status: response.status().as_u16(),
            });
        }

        let table = response
            .json::<CompatTable>()
            .with_context(|| format!("Failed to decode compatibility table from {}", self.url))?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let fetcher = HttpCompatFetcher::new("https://example.com/compat.json");
        assert_eq!(fetcher.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpCompatFetcher::with_timeout(
            "https://example.com/compat.json",
            Duration::from_secs(5),
        );
        assert_eq!(fetcher.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn fetch_decodes_table() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/compat.json");
            then.status(200).json_body(serde_json::json!({
                "glossa": {
                    "2.0.0": { "en_core_web_sm": ["2.0.0"] }
                }
            }));
        });

        let fetcher = HttpCompatFetcher::with_timeout(
            &server.url("/compat.json"),
            Duration::from_secs(5),
        );
        let table = fetcher.fetch().unwrap();

        assert!(table.glossa.contains_key("2.0.0"));
        assert_eq!(table.glossa["2.0.0"]["en_core_web_sm"], vec!["2.0.0"]);
    }

    #[test]
    fn fetch_surfaces_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/compat.json");
            then.status(404).body("Not Found");
        });

        let fetcher = HttpCompatFetcher::with_timeout(
            &server.url("/compat.json"),
            Duration::from_secs(5),
        );
        let err = fetcher.fetch().unwrap_err();

        assert!(matches!(err, GlossaError::Fetch { status: 404 }));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn fetch_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/compat.json");
            then.status(200).body("not json");
        });

        let fetcher = HttpCompatFetcher::with_timeout(
            &server.url("/compat.json"),
            Duration::from_secs(5),
        );
        assert!(fetcher.fetch().is_err());
    }
}

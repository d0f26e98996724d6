//! Public configuration for the GWAS Catalog client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

use gwasgene_core::catalog::DEFAULT_FTP_BASE_URL;

/// Default GWAS Catalog REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://www.ebi.ac.uk/gwas/rest/api";

/// Configuration for the GWAS Catalog client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use gwasgene_catalog::CatalogClientConfig;
/// use std::time::Duration;
///
/// let config = CatalogClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL for the REST API
    pub(crate) api_base_url: String,
    /// Base URL of the summary statistics FTP mirror
    pub(crate) ftp_base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout for API and listing calls
    pub(crate) timeout: Duration,
    /// Studies per search page
    pub(crate) page_size: u32,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Lower bound of the backoff delay
    pub(crate) retry_min_delay: Duration,
    /// Upper bound of the backoff delay
    pub(crate) retry_max_delay: Duration,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ftp_base_url: DEFAULT_FTP_BASE_URL.to_string(),
            user_agent: concat!("gwasgene-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            page_size: 50,
            max_retries: 5,
            retry_min_delay: Duration::from_secs(2),
            retry_max_delay: Duration::from_secs(10),
        }
    }
}

impl CatalogClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the REST API base URL.
    ///
    /// Defaults to `https://www.ebi.ac.uk/gwas/rest/api`.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the summary statistics FTP base URL.
    #[must_use]
    pub fn with_ftp_base_url(mut self, url: impl Into<String>) -> Self {
        self.ftp_base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout. Downloads are not bounded by it.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of studies requested per search page.
    ///
    /// Defaults to 50.
    #[must_use]
    pub const fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 5 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the bounds of the exponential backoff delay.
    ///
    /// Defaults to 2s..10s.
    #[must_use]
    pub const fn with_retry_delays(mut self, min: Duration, max: Duration) -> Self {
        self.retry_min_delay = min;
        self.retry_max_delay = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogClientConfig::new();
        assert_eq!(config.api_base_url, "https://www.ebi.ac.uk/gwas/rest/api");
        assert!(config.ftp_base_url.starts_with("http://ftp.ebi.ac.uk/"));
        assert!(config.user_agent.contains("gwasgene-catalog"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, 50);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_min_delay, Duration::from_secs(2));
        assert_eq!(config.retry_max_delay, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_pattern() {
        let config = CatalogClientConfig::new()
            .with_api_base_url("http://localhost:8080/api")
            .with_ftp_base_url("http://localhost:8081/ftp")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_page_size(10)
            .with_max_retries(1)
            .with_retry_delays(Duration::from_millis(1), Duration::from_millis(5));

        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.ftp_base_url, "http://localhost:8081/ftp");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.retry_max_delay, Duration::from_millis(5));
    }
}

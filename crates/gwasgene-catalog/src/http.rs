//! HTTP backend abstraction for the GWAS Catalog.
//!
//! The production implementation uses reqwest with exponential backoff for
//! transient errors. Tests inject a fake backend instead.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CatalogConfig, RetryPolicy};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends used by the catalog client.
///
/// This is an implementation detail - external code should use the
/// `CatalogClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CatalogResult<T>;

    /// Fetch a URL as text (FTP directory listings).
    async fn get_text(&self, url: &Url) -> CatalogResult<String>;

    /// Stream a URL into `dest`, returning the bytes written.
    async fn download_to(&self, url: &Url, dest: &Path) -> CatalogResult<u64>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Server errors (5xx) and network errors are retried with exponential
/// backoff; everything else fails immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    retry: RetryPolicy,
    timeout: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            retry: config.retry,
            timeout: config.timeout,
        })
    }

    /// Send a GET with automatic retry for transient errors.
    ///
    /// `timeout` bounds the whole request; downloads pass `None` so large
    /// files are not cut off.
    async fn fetch_with_retry(
        &self,
        url: &Url,
        timeout: Option<Duration>,
        accept_json: bool,
    ) -> CatalogResult<reqwest::Response> {
        let mut attempt: u8 = 0;

        loop {
            let mut request = self.client.get(url.as_str());
            if let Some(timeout) = timeout {
                request = request.timeout(timeout);
            }
            if accept_json {
                request = request.header(reqwest::header::ACCEPT, "application/json");
            }

            let error = match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(CatalogError::NotFound {
                            url: url.to_string(),
                        });
                    }
                    CatalogError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    }
                }
                Err(e) => CatalogError::Network(e),
            };

            if !error.is_transient() || attempt >= self.retry.max_retries {
                return Err(error);
            }

            attempt += 1;
            let delay = self.retry.delay_for(attempt);
            tracing::warn!(
                url = %url,
                attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %error,
                "Transient error, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CatalogResult<T> {
        let response = self.fetch_with_retry(url, Some(self.timeout), true).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_text(&self, url: &Url) -> CatalogResult<String> {
        let response = self.fetch_with_retry(url, Some(self.timeout), false).await?;
        Ok(response.text().await?)
    }

    async fn download_to(&self, url: &Url, dest: &Path) -> CatalogResult<u64> {
        let response = self.fetch_with_retry(url, None, false).await?;

        let io_err = |source| CatalogError::Io {
            path: dest.display().to_string(),
            source,
        };
        let mut file = tokio::fs::File::create(dest).await.map_err(io_err)?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(io_err)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(io_err)?;

        tracing::debug!(url = %url, bytes = written, "Download complete");
        Ok(written)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        Json(serde_json::Value),
        Text(String),
    }

    /// A fake HTTP backend that returns canned responses.
    ///
    /// Patterns are matched in insertion order against the full URL; the
    /// first match wins. Every requested URL is recorded.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for URLs containing `url_contains`.
        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        pub fn with_json(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.with_response(url_contains, CannedResponse::Json(json))
        }

        pub fn with_text(self, url_contains: &str, text: &str) -> Self {
            self.with_response(url_contains, CannedResponse::Text(text.to_string()))
        }

        /// URLs requested so far.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find_response(&self, url: &Url) -> CatalogResult<CannedResponse> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
                .ok_or_else(|| CatalogError::NotFound {
                    url: url.to_string(),
                })
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CatalogResult<T> {
            match self.find_response(url)? {
                CannedResponse::Json(json) => Ok(serde_json::from_value(json)?),
                CannedResponse::Text(text) => Ok(serde_json::from_str(&text)?),
            }
        }

        async fn get_text(&self, url: &Url) -> CatalogResult<String> {
            match self.find_response(url)? {
                CannedResponse::Json(json) => Ok(json.to_string()),
                CannedResponse::Text(text) => Ok(text),
            }
        }

        async fn download_to(&self, url: &Url, dest: &Path) -> CatalogResult<u64> {
            let body = self.get_text(url).await?;
            std::fs::write(dest, &body).map_err(|source| CatalogError::Io {
                path: dest.display().to_string(),
                source,
            })?;
            Ok(body.len() as u64)
        }
    }
}

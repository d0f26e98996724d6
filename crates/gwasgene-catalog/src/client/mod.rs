//! GWAS Catalog client for study search and sumstat resolution.

mod studies;
mod sumstats;

use url::Url;

use crate::config::CatalogClientConfig;
use crate::error::CatalogResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{CatalogConfig, RetryPolicy};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the GWAS Catalog REST API and its FTP mirror.
///
/// Generic over the HTTP backend so tests can inject canned responses.
/// External code uses `DefaultCatalogClient` through the
/// `CatalogClientPort` trait.
pub struct CatalogClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: CatalogConfig,
}

impl DefaultCatalogClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if a configured base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(config: &CatalogClientConfig) -> CatalogResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &CatalogClientConfig) -> CatalogResult<CatalogConfig> {
        #[allow(clippy::cast_possible_truncation)] // Backoff bounds are seconds, not centuries
        let retry = RetryPolicy {
            max_retries: config.max_retries,
            min_delay_ms: config.retry_min_delay.as_millis() as u64,
            max_delay_ms: config.retry_max_delay.as_millis() as u64,
            ..RetryPolicy::default()
        };

        Ok(CatalogConfig {
            api_base_url: Url::parse(&config.api_base_url)?,
            ftp_base_url: config.ftp_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            retry,
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CatalogConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

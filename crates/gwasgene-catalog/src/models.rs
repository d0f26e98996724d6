//! Internal API response types for the GWAS Catalog REST API.
//!
//! These types are internal to `gwasgene-catalog` and are not exposed to
//! consumers. The API speaks HAL JSON: resources sit under `_embedded` and
//! links under `_links`.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::DEFAULT_API_BASE_URL;
use gwasgene_core::catalog::DEFAULT_FTP_BASE_URL;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// REST API root
    pub api_base_url: Url,
    /// FTP mirror root (no trailing slash)
    pub ftp_base_url: String,
    /// Studies per search page
    pub page_size: u32,
    /// Retry behaviour for transient failures
    pub retry: RetryPolicy,
    /// Per-request timeout for API and listing calls
    pub timeout: Duration,
    /// User agent header
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API URL is valid"),
            ftp_base_url: DEFAULT_FTP_BASE_URL.to_string(),
            page_size: 50,
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("gwasgene-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Exponential backoff: `multiplier * 2^attempt`, clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u8,
    pub multiplier_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            multiplier_ms: 1000,
            min_delay_ms: 2000,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u8) -> Duration {
        let factor = 1u64 << u32::from(attempt.min(32));
        let raw = self.multiplier_ms.saturating_mul(factor);
        Duration::from_millis(raw.max(self.min_delay_ms).min(self.max_delay_ms))
    }
}

// ============================================================================
// Study search response
// ============================================================================

/// One page of `studies/search/findByPublicationIdPubmedId`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudySearchPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedStudies>,
    #[serde(default)]
    pub page: Option<PageInfo>,
}

impl StudySearchPage {
    /// Studies on this page (empty when `_embedded` is absent).
    pub fn studies(&self) -> &[StudyResource] {
        self.embedded.as_ref().map_or(&[], |e| e.studies.as_slice())
    }

    /// Total page count, defaulting to 1 when absent.
    pub fn total_pages(&self) -> u64 {
        self.page.as_ref().and_then(|p| p.total_pages).unwrap_or(1)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedStudies {
    #[serde(default)]
    pub studies: Vec<StudyResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u64>,
}

/// A study resource. Only the fields the client reads are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyResource {
    #[serde(rename = "diseaseTrait", default)]
    pub disease_trait: Option<DiseaseTrait>,
    #[serde(rename = "_links", default)]
    pub links: Option<StudyLinks>,
}

impl StudyResource {
    /// The disease trait text, or empty when absent.
    pub fn trait_text(&self) -> &str {
        self.disease_trait
            .as_ref()
            .and_then(|t| t.trait_name.as_deref())
            .unwrap_or("")
    }

    /// The study's own URL.
    pub fn self_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.self_link.as_ref())
            .map(|l| l.href.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiseaseTrait {
    #[serde(rename = "trait", default)]
    pub trait_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyLinks {
    #[serde(rename = "self", default)]
    pub self_link: Option<HalLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HalLink {
    pub href: String,
}

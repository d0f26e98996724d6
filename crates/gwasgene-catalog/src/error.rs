//! Internal error types for GWAS Catalog operations.
//!
//! These errors are internal to `gwasgene-catalog` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors related to GWAS Catalog API and FTP operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request failed with an HTTP error status.
    #[error("GWAS Catalog request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The requested resource was not found.
    #[error("Not found: {url}")]
    NotFound {
        /// The URL that returned 404
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from GWAS Catalog: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// An FTP directory listing contained no TSV link.
    #[error("Couldn't find TSV file at {url}")]
    NoTsvFile {
        /// The directory URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Writing a downloaded file failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Destination path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Whether retrying the request may succeed.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::ApiRequestFailed { status, .. } => *status >= 500,
            Self::Network(_) => true,
            _ => false,
        }
    }
}

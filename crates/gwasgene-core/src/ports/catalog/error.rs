//! Error types for catalog port operations.

use thiserror::Error;

/// Errors from catalog port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum CatalogPortError {
    /// The requested resource does not exist.
    #[error("Not found: {url}")]
    NotFound {
        /// The URL that returned 404
        url: String,
    },

    /// An FTP directory listing had no TSV file.
    #[error("Couldn't find TSV file at {url}")]
    NoSumstatFile {
        /// The directory URL
        url: String,
    },

    /// Input did not contain a GCST accession.
    #[error("GCST URL does not contain GCST {input}")]
    InvalidAccession {
        /// The rejected input
        input: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Unexpected response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Writing a downloaded file failed.
    #[error("Failed to write {path}: {message}")]
    Write {
        /// Destination path
        path: String,
        /// IO failure description
        message: String,
    },
}

/// Result type alias for catalog port operations.
pub type CatalogPortResult<T> = Result<T, CatalogPortError>;

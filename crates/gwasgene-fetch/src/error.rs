//! Pipeline errors.

use gwasgene_core::{CatalogPortError, ManifestError, SumstatError};
use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while building test data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Catalog lookup or download failed.
    #[error(transparent)]
    Catalog(#[from] CatalogPortError),

    /// Reading or writing the URL manifest failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Sampling a downloaded sumstat failed.
    #[error("Failed to sample {url}: {source}")]
    Sample {
        /// Source URL of the sumstat
        url: String,
        #[source]
        source: SumstatError,
    },

    /// Creating a directory or temp file failed.
    #[error("Failed to prepare {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A worker task panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

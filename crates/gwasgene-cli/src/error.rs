//! CLI-specific error types and exit codes.

use gwasgene_catalog::CatalogError;
use gwasgene_core::{ManifestError, SumstatError};
use gwasgene_fetch::FetchError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more files contain invalid rows.
    #[error("{files} file(s) failed validation")]
    InvalidData { files: usize },

    /// A file could not be read as a sumstat.
    #[error("{0}")]
    Sumstat(String),

    /// Network or catalog failure.
    #[error("{0}")]
    Unavailable(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Codes follow sysexits.h:
    /// - 65: input data is invalid
    /// - 69: a remote service is unavailable
    /// - 74: IO failure
    /// - 78: configuration error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidData { .. } | Self::Sumstat(_) => 65, // EX_DATAERR
            Self::Unavailable(_) => 69,                        // EX_UNAVAILABLE
            Self::Io(_) => 74,                                 // EX_IOERR
            Self::Config(_) => 78,                             // EX_CONFIG
        }
    }
}

impl From<SumstatError> for CliError {
    fn from(err: SumstatError) -> Self {
        match err {
            SumstatError::Open { .. } | SumstatError::Io(_) => Self::Io(err.to_string()),
            other => Self::Sumstat(other.to_string()),
        }
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Io { .. } => Self::Io(err.to_string()),
            ManifestError::Json { .. } => Self::Config(err.to_string()),
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidUrl(_) => Self::Config(err.to_string()),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Manifest(e) => e.into(),
            FetchError::Sample { .. } => Self::Sumstat(err.to_string()),
            FetchError::Io { .. } => Self::Io(err.to_string()),
            FetchError::Catalog(_) | FetchError::Task(_) => Self::Unavailable(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned by a handler.
///
/// Errors that are not a [`CliError`] exit with 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

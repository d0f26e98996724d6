//! Errors for reading, validating and sampling sumstat files.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{Field, ValidationError};

/// Result type alias for sumstat operations.
pub type SumstatResult<T> = Result<T, SumstatError>;

/// A row that failed validation, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}: {error}")]
pub struct RowError {
    /// Line number in the file (the header is line 1).
    pub line: usize,
    /// Field failures for the row.
    pub error: ValidationError,
}

/// Errors from sumstat file operations.
#[derive(Debug, Error)]
pub enum SumstatError {
    /// The file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing failed mid-stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file has no header line.
    #[error("File is empty (no header line)")]
    Empty,

    /// The header lacks columns for required fields.
    #[error("Header is missing required columns: {}", format_fields(.missing))]
    MissingColumns {
        /// Fields with no matching column
        missing: Vec<Field>,
    },

    /// A data row failed validation.
    #[error("Invalid row at {0}")]
    InvalidRow(RowError),

    /// A sampled output file contained no data rows and was removed.
    #[error("Empty output: {}", .path.display())]
    EmptyOutput {
        /// The removed output file
        path: PathBuf,
    },
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| format!("{f} ({})", f.aliases().join("|")))
        .collect::<Vec<_>>()
        .join(", ")
}

//! The sumstat URL manifest (`urls.json`).
//!
//! The manifest caches resolved sumstat URLs so repeated test-data builds
//! do not hit the catalog API again. It is a JSON array of
//! `{"id": ..., "urls": [...]}` objects, pretty-printed with four spaces.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading or writing the manifest and accession lists.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// File system failure.
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed manifest JSON.
    #[error("Invalid manifest {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Sumstat URLs grouped under a test data directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumstatSource {
    /// Directory name under the test data root (a PubMed ID or `gcsts`).
    pub id: String,
    /// Sumstat file URLs.
    pub urls: Vec<String>,
}

impl SumstatSource {
    pub fn new(id: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            id: id.into(),
            urls,
        }
    }
}

/// The full list of sumstat sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub sources: Vec<SumstatSource>,
}

impl Manifest {
    /// Load a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| ManifestError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the manifest, pretty-printed with a four-space indent.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ManifestError::io(parent, e))?;
        }
        let file = fs::File::create(path).map_err(|e| ManifestError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)
            .map_err(|source| ManifestError::Json {
                path: path.display().to_string(),
                source,
            })?;
        writer.flush().map_err(|e| ManifestError::io(path, e))
    }

    /// Serialize the manifest as pretty JSON into `writer`.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)
    }

    /// Total number of URLs across all sources.
    pub fn url_count(&self) -> usize {
        self.sources.iter().map(|s| s.urls.len()).sum()
    }

    pub fn push(&mut self, source: SumstatSource) {
        self.sources.push(source);
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Read a curated accession list.
///
/// The first line is a header comment and is skipped. Remaining lines are
/// trimmed; blank lines are dropped.
pub fn read_accession_list(path: &Path) -> Result<Vec<String>, ManifestError> {
    let file = fs::File::open(path).map_err(|e| ManifestError::io(path, e))?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines().skip(1) {
        let line = line.map_err(|e| ManifestError::io(path, e))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_string());
        }
    }
    Ok(entries)
}

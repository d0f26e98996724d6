//! Catalog studies and the gene-based filter.

use serde::{Deserialize, Serialize};

use super::ftp::Accession;

/// Trait substrings that mark gene-based summary statistics.
pub const GENE_BASED_MARKERS: &[&str] = &["gene-based", "gene burden"];

/// Whether a study's disease trait marks it as gene-based.
pub fn is_gene_based(disease_trait: &str) -> bool {
    let lowered = disease_trait.to_lowercase();
    GENE_BASED_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Link to a study resource in the catalog REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyLink {
    /// Absolute URL of the study, ending in its accession.
    pub href: String,
}

impl StudyLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The study accession embedded in the link.
    pub fn accession(&self) -> Option<Accession> {
        Accession::find_in(&self.href)
    }
}

//! Port trait implementation for `CatalogClient`.

use std::path::Path;

use async_trait::async_trait;
use gwasgene_core::catalog::{Accession, StudyLink};
use gwasgene_core::ports::catalog::{CatalogClientPort, CatalogPortError, CatalogPortResult};

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

impl From<CatalogError> for CatalogPortError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { url } => Self::NotFound { url },
            CatalogError::NoTsvFile { url } => Self::NoSumstatFile { url },
            CatalogError::ApiRequestFailed { status, url } => Self::Network {
                message: format!("request failed with status {status}: {url}"),
            },
            CatalogError::Network(e) => Self::Network {
                message: e.to_string(),
            },
            CatalogError::InvalidResponse { message } => Self::InvalidResponse { message },
            CatalogError::InvalidUrl(e) => Self::InvalidResponse {
                message: format!("invalid URL: {e}"),
            },
            CatalogError::JsonParse(e) => Self::InvalidResponse {
                message: e.to_string(),
            },
            CatalogError::Io { path, source } => Self::Write {
                path,
                message: source.to_string(),
            },
        }
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CatalogClientPort for CatalogClient<B> {
    async fn gene_based_studies(&self, pubmed_id: u64) -> CatalogPortResult<Vec<StudyLink>> {
        Ok(self.find_gene_based_studies(pubmed_id).await?)
    }

    fn sumstat_directory(&self, accession: &Accession) -> String {
        self.directory_url(accession)
    }

    async fn sumstat_file_url(&self, directory_url: &str) -> CatalogPortResult<String> {
        Ok(self.tsv_url(directory_url).await?)
    }

    async fn download_to(&self, url: &str, dest: &Path) -> CatalogPortResult<u64> {
        Ok(self.download(url, dest).await?)
    }
}

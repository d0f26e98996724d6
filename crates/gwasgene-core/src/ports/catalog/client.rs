//! GWAS Catalog client port trait.

use std::path::Path;

use async_trait::async_trait;

use super::error::{CatalogPortError, CatalogPortResult};
use crate::catalog::{Accession, StudyLink};

/// Port trait for GWAS Catalog REST and FTP operations.
///
/// The implementation lives in `gwasgene-catalog`; the fetch pipeline only
/// sees this trait.
#[async_trait]
pub trait CatalogClientPort: Send + Sync {
    /// Links to the gene-based studies of a publication.
    ///
    /// Walks every result page of the publication search and keeps studies
    /// whose disease trait marks them as gene-based.
    async fn gene_based_studies(&self, pubmed_id: u64) -> CatalogPortResult<Vec<StudyLink>>;

    /// FTP directory URL holding an accession's summary statistics.
    fn sumstat_directory(&self, accession: &Accession) -> String;

    /// Resolve the sumstat TSV inside an FTP directory listing.
    async fn sumstat_file_url(&self, directory_url: &str) -> CatalogPortResult<String>;

    /// Stream a remote file to `dest`, returning the number of bytes written.
    async fn download_to(&self, url: &str, dest: &Path) -> CatalogPortResult<u64>;

    /// Resolve the sumstat TSV URL for an accession or a study URL.
    async fn sumstat_url_for(&self, gcst: &str) -> CatalogPortResult<String> {
        let accession =
            Accession::find_in(gcst).ok_or_else(|| CatalogPortError::InvalidAccession {
                input: gcst.trim().to_string(),
            })?;
        let directory = self.sumstat_directory(&accession);
        self.sumstat_file_url(&directory).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn CatalogClientPort>) {}

    struct ListingStub;

    #[async_trait]
    impl CatalogClientPort for ListingStub {
        async fn gene_based_studies(&self, _pubmed_id: u64) -> CatalogPortResult<Vec<StudyLink>> {
            Ok(Vec::new())
        }

        fn sumstat_directory(&self, accession: &Accession) -> String {
            format!("http://ftp/{accession}")
        }

        async fn sumstat_file_url(&self, directory_url: &str) -> CatalogPortResult<String> {
            Ok(format!("{directory_url}/sumstats.tsv.gz"))
        }

        async fn download_to(&self, _url: &str, _dest: &Path) -> CatalogPortResult<u64> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_sumstat_url_for_trims_list_entries() {
        let url = ListingStub.sumstat_url_for("GCST90082112\n").await.unwrap();
        assert_eq!(url, "http://ftp/GCST90082112/sumstats.tsv.gz");
    }

    #[tokio::test]
    async fn test_sumstat_url_for_rejects_non_accessions() {
        let err = ListingStub.sumstat_url_for("not-a-study").await.unwrap_err();
        assert!(matches!(err, CatalogPortError::InvalidAccession { .. }));
    }
}

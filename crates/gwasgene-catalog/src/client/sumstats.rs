//! FTP directory resolution and sumstat downloads.

use std::path::Path;

use gwasgene_core::catalog::{Accession, find_tsv_link, ftp_directory_url};

use crate::error::{CatalogError, CatalogResult};
use crate::http::HttpBackend;
use crate::url::{join_listing_link, parse_remote};

use super::CatalogClient;

impl<B: HttpBackend> CatalogClient<B> {
    /// FTP directory of an accession under the configured mirror.
    pub(crate) fn directory_url(&self, accession: &Accession) -> String {
        ftp_directory_url(&self.config.ftp_base_url, accession)
    }

    /// URL of the first TSV linked from an FTP directory listing.
    pub(crate) async fn tsv_url(&self, directory_url: &str) -> CatalogResult<String> {
        let url = parse_remote(directory_url)?;
        let listing = self.backend.get_text(&url).await?;

        let link = find_tsv_link(&listing).ok_or_else(|| CatalogError::NoTsvFile {
            url: directory_url.to_string(),
        })?;

        let tsv = join_listing_link(directory_url, link);
        tracing::debug!(directory = directory_url, tsv = %tsv, "Resolved sumstat file");
        Ok(tsv)
    }

    /// Download a remote file to `dest`.
    pub(crate) async fn download(&self, url: &str, dest: &Path) -> CatalogResult<u64> {
        let url = parse_remote(url)?;
        tracing::info!(url = %url, dest = %dest.display(), "Downloading");
        self.backend.download_to(&url, dest).await
    }
}

//! Publication study search.

use gwasgene_core::catalog::{StudyLink, is_gene_based};

use crate::error::{CatalogError, CatalogResult};
use crate::http::HttpBackend;
use crate::models::StudySearchPage;
use crate::url::build_pubmed_search_url;

use super::CatalogClient;

/// Upper bound on pages walked for a single publication.
const MAX_PAGES: u64 = 1000;

impl<B: HttpBackend> CatalogClient<B> {
    /// Fetch a single page of a publication's studies.
    pub(crate) async fn pubmed_studies_page(
        &self,
        pubmed_id: u64,
        page: u64,
    ) -> CatalogResult<StudySearchPage> {
        let url = build_pubmed_search_url(&self.config, pubmed_id, page);
        tracing::info!(pubmed_id, page, "Fetching publication studies");
        self.backend.get_json(&url).await
    }

    /// Links to all gene-based studies of a publication, in API order.
    pub(crate) async fn find_gene_based_studies(
        &self,
        pubmed_id: u64,
    ) -> CatalogResult<Vec<StudyLink>> {
        let mut links = Vec::new();
        let mut page = 0;

        loop {
            let response = self.pubmed_studies_page(pubmed_id, page).await?;

            for study in response.studies() {
                if !is_gene_based(study.trait_text()) {
                    continue;
                }
                let href = study
                    .self_href()
                    .ok_or_else(|| CatalogError::InvalidResponse {
                        message: format!(
                            "gene-based study without a self link in publication {pubmed_id}"
                        ),
                    })?;
                links.push(StudyLink::new(href));
            }

            if page >= response.total_pages().saturating_sub(1) || page + 1 >= MAX_PAGES {
                break;
            }
            page += 1;
        }

        tracing::debug!(pubmed_id, studies = links.len(), "Gene-based studies found");
        Ok(links)
    }
}

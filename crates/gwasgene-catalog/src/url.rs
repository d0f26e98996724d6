//! URL construction helpers for the GWAS Catalog API.

use crate::error::CatalogResult;
use crate::models::CatalogConfig;
use url::Url;

/// Path of the publication search endpoint, relative to the API root.
const FIND_BY_PUBMED_PATH: &str = "studies/search/findByPublicationIdPubmedId";

/// Build the study search URL for one page of a publication's studies.
pub fn build_pubmed_search_url(config: &CatalogConfig, pubmed_id: u64, page: u64) -> Url {
    let mut url = config.api_base_url.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{FIND_BY_PUBMED_PATH}"));

    url.query_pairs_mut()
        .clear()
        .append_pair("pubmedId", &pubmed_id.to_string())
        .append_pair("page", &page.to_string())
        .append_pair("size", &config.page_size.to_string());

    url
}

/// Parse a directory or file URL coming from configuration or listings.
pub fn parse_remote(url: &str) -> CatalogResult<Url> {
    Ok(Url::parse(url.trim())?)
}

/// Join a listing link onto its directory URL.
pub fn join_listing_link(directory_url: &str, link: &str) -> String {
    format!("{}/{link}", directory_url.trim_end_matches('/'))
}

//! Resolve sumstat URLs from the catalog.

use std::sync::Arc;

use tokio::task::JoinSet;

use gwasgene_core::paths::{ensure_dir, study_dir};
use gwasgene_core::ports::CatalogClientPort;
use gwasgene_core::{Manifest, SumstatSource};

use crate::error::{FetchError, FetchResult};
use crate::events::{FetchEvent, FetchEventSink};

/// Manifest id for the curated accession list.
pub(crate) const GCSTS_SOURCE_ID: &str = "gcsts";

/// Resolve curated accessions with at most `workers` lookups in flight.
///
/// Each accession becomes its own `gcsts` entry, in completion order. The
/// first failure aborts the remaining lookups.
pub(crate) async fn resolve_accessions(
    catalog: &Arc<dyn CatalogClientPort>,
    gcsts: &[String],
    workers: usize,
) -> FetchResult<Vec<SumstatSource>> {
    let mut set = JoinSet::new();
    let mut sources = Vec::with_capacity(gcsts.len());
    let mut pending = gcsts.iter();

    loop {
        while set.len() < workers.max(1) {
            let Some(gcst) = pending.next() else { break };
            let catalog = Arc::clone(catalog);
            let gcst = gcst.clone();
            set.spawn(async move { catalog.sumstat_url_for(&gcst).await });
        }

        let Some(joined) = set.join_next().await else { break };
        let url = joined??;
        tracing::info!(target: "gwasgene.fetch", url = %url, "Resolved accession");
        sources.push(SumstatSource::new(GCSTS_SOURCE_ID, vec![url]));
    }

    Ok(sources)
}

/// Resolve every gene-based sumstat of a publication.
///
/// Creates `<data dir>/<pubmed id>` even when the publication has none.
pub(crate) async fn resolve_publication(
    catalog: &dyn CatalogClientPort,
    data_dir: &std::path::Path,
    pubmed_id: u64,
) -> FetchResult<SumstatSource> {
    let id = pubmed_id.to_string();
    let dir = study_dir(data_dir, &id);
    ensure_dir(&dir).map_err(|e| FetchError::io(&dir, e))?;

    let links = catalog.gene_based_studies(pubmed_id).await?;
    let mut urls = Vec::with_capacity(links.len());
    for link in &links {
        urls.push(catalog.sumstat_url_for(&link.href).await?);
    }

    tracing::info!(target: "gwasgene.fetch", pubmed_id, urls = urls.len(), "Resolved publication");
    Ok(SumstatSource::new(id, urls))
}

/// Build the full manifest: curated accessions first, then publications in
/// order.
pub(crate) async fn build_manifest(
    catalog: &Arc<dyn CatalogClientPort>,
    data_dir: &std::path::Path,
    gcsts: &[String],
    pubmed_ids: &[u64],
    workers: usize,
    events: &dyn FetchEventSink,
) -> FetchResult<Manifest> {
    tracing::info!(target: "gwasgene.fetch", count = gcsts.len(), "Querying GCSTs");
    let mut manifest = Manifest::default();

    for source in resolve_accessions(catalog, gcsts, workers).await? {
        events.emit(FetchEvent::SourceResolved {
            id: source.id.clone(),
            urls: source.urls.len(),
        });
        manifest.push(source);
    }

    for &pubmed_id in pubmed_ids {
        let source = resolve_publication(catalog.as_ref(), data_dir, pubmed_id).await?;
        events.emit(FetchEvent::SourceResolved {
            id: source.id.clone(),
            urls: source.urls.len(),
        });
        manifest.push(source);
    }

    Ok(manifest)
}

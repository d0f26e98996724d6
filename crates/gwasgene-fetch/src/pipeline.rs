//! The test data builder.
//!
//! Two phases: resolve sumstat URLs into a manifest (cached on disk), then
//! download and sample every URL into the test data directory.

use std::path::PathBuf;
use std::sync::Arc;

use gwasgene_core::paths::ensure_dir;
use gwasgene_core::ports::CatalogClientPort;
use gwasgene_core::{Manifest, read_accession_list};

use crate::config::FetchConfig;
use crate::download::{FetchSummary, SampleJob, WorkerDeps, run_jobs};
use crate::error::{FetchError, FetchResult};
use crate::events::{FetchEventSink, NoopEventSink};
use crate::query::build_manifest;

/// Publications whose gene-based studies seed the test data.
pub const PUBMED_IDS: [u64; 10] = [
    34_662_886, 36_088_354, 36_596_879, 37_592_023, 39_180_217, 39_362_880, 40_021_682,
    40_073_867, 36_450_978, 37_949_852,
];

/// Injected dependencies.
#[derive(Clone)]
pub struct FetchDeps {
    pub catalog: Arc<dyn CatalogClientPort>,
    pub events: Arc<dyn FetchEventSink>,
}

impl FetchDeps {
    /// Dependencies with events discarded.
    pub fn new(catalog: Arc<dyn CatalogClientPort>) -> Self {
        Self {
            catalog,
            events: Arc::new(NoopEventSink),
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: Arc<dyn FetchEventSink>) -> Self {
        self.events = events;
        self
    }
}

/// Inputs of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataSources {
    /// Curated accession list (header comment, then one GCST per line).
    pub gcst_list: PathBuf,
    /// Cached URL manifest; created when absent.
    pub manifest: PathBuf,
    /// Publications to search for gene-based studies.
    pub pubmed_ids: Vec<u64>,
}

impl TestDataSources {
    pub fn new(gcst_list: impl Into<PathBuf>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            gcst_list: gcst_list.into(),
            manifest: manifest.into(),
            pubmed_ids: PUBMED_IDS.to_vec(),
        }
    }

    #[must_use]
    pub fn with_pubmed_ids(mut self, ids: Vec<u64>) -> Self {
        self.pubmed_ids = ids;
        self
    }
}

/// Builds sampled gene-based sumstats for tests.
pub struct TestDataBuilder {
    deps: FetchDeps,
    config: FetchConfig,
}

impl TestDataBuilder {
    pub const fn new(deps: FetchDeps, config: FetchConfig) -> Self {
        Self { deps, config }
    }

    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Resolve sumstat URLs for curated accessions and publications.
    pub async fn query_catalog(&self, gcsts: &[String], pubmed_ids: &[u64]) -> FetchResult<Manifest> {
        build_manifest(
            &self.deps.catalog,
            self.config.data_dir(),
            gcsts,
            pubmed_ids,
            self.config.query_workers(),
            self.deps.events.as_ref(),
        )
        .await
    }

    /// Resolve URLs from an accession list file and save the manifest.
    pub async fn query_and_save(&self, sources: &TestDataSources) -> FetchResult<Manifest> {
        let gcsts = read_accession_list(&sources.gcst_list)?;
        let manifest = self.query_catalog(&gcsts, &sources.pubmed_ids).await?;
        manifest.save(&sources.manifest)?;
        tracing::info!(
            target: "gwasgene.fetch",
            path = %sources.manifest.display(),
            urls = manifest.url_count(),
            "Saved manifest"
        );
        Ok(manifest)
    }

    /// Plan one job per manifest URL, creating each source directory.
    pub fn plan_jobs(&self, manifest: &Manifest) -> FetchResult<Vec<SampleJob>> {
        let data_dir = self.config.data_dir();
        let mut jobs = Vec::with_capacity(manifest.url_count());

        for source in &manifest.sources {
            let dir = gwasgene_core::paths::study_dir(data_dir, &source.id);
            ensure_dir(&dir).map_err(|e| FetchError::io(&dir, e))?;
            jobs.extend(
                source
                    .urls
                    .iter()
                    .map(|url| SampleJob::plan(data_dir, &source.id, url)),
            );
        }

        Ok(jobs)
    }

    /// Download and sample every manifest URL.
    pub async fn download_sumstats(&self, manifest: &Manifest) -> FetchResult<FetchSummary> {
        let jobs = self.plan_jobs(manifest)?;
        tracing::info!(target: "gwasgene.fetch", jobs = jobs.len(), "Downloading sumstats");

        let deps = WorkerDeps {
            catalog: Arc::clone(&self.deps.catalog),
            sample: self.config.sample(),
        };
        run_jobs(
            jobs,
            deps,
            self.config.download_workers(),
            Arc::clone(&self.deps.events),
        )
        .await
    }

    /// Full run: load or build the manifest, then download and sample.
    pub async fn create_test_data(&self, sources: &TestDataSources) -> FetchResult<FetchSummary> {
        let manifest = self.load_or_query(sources).await?;
        self.download_sumstats(&manifest).await
    }

    async fn load_or_query(&self, sources: &TestDataSources) -> FetchResult<Manifest> {
        if sources.manifest.is_file() {
            tracing::info!(
                target: "gwasgene.fetch",
                path = %sources.manifest.display(),
                "Using cached manifest"
            );
            return Ok(Manifest::load(&sources.manifest)?);
        }
        self.query_and_save(sources).await
    }
}

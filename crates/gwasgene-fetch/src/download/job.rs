//! A single download-and-sample job.
//!
//! Jobs are value types; the worker gets everything else from cloned Arc
//! dependencies.

use std::path::PathBuf;
use std::sync::Arc;

use gwasgene_core::catalog::sumstat_basename;
use gwasgene_core::paths::study_dir;
use gwasgene_core::ports::CatalogClientPort;
use gwasgene_core::sampling::sample_sumstat;
use gwasgene_core::sumstats::SUMSTAT_SUFFIX;
use gwasgene_core::{SampleOptions, SampleOutcome};

use crate::error::{FetchError, FetchResult};

/// Dependencies shared by every job.
#[derive(Clone)]
pub(crate) struct WorkerDeps {
    pub catalog: Arc<dyn CatalogClientPort>,
    pub sample: SampleOptions,
}

/// One sumstat URL and where its sample goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleJob {
    /// Manifest entry the URL belongs to.
    pub source_id: String,
    /// Remote sumstat URL.
    pub url: String,
    /// Directory of the source (`<data dir>/<id>`).
    pub dir: PathBuf,
    /// Sample output: `<dir>/<basename>.tsv.gz`.
    pub dest: PathBuf,
}

impl SampleJob {
    /// Plan the job for `url` under `data_dir`.
    pub fn plan(data_dir: &std::path::Path, source_id: &str, url: &str) -> Self {
        let dir = study_dir(data_dir, source_id);
        let dest = dir.join(format!("{}{SUMSTAT_SUFFIX}", sumstat_basename(url)));
        Self {
            source_id: source_id.to_string(),
            url: url.to_string(),
            dir,
            dest,
        }
    }

    const fn complete(self, outcome: SampleOutcome) -> CompletedJob {
        CompletedJob { job: self, outcome }
    }

    fn sample_error(&self, source: gwasgene_core::SumstatError) -> FetchError {
        FetchError::Sample {
            url: self.url.clone(),
            source,
        }
    }
}

/// A job that finished successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedJob {
    pub job: SampleJob,
    pub outcome: SampleOutcome,
}

/// Run a job to completion.
///
/// Existing output is kept (and re-checked) unless overwriting. Otherwise
/// the sumstat is downloaded to a temp file next to the output, sampled,
/// and the temp file removed.
pub(crate) async fn run_job(job: SampleJob, deps: &WorkerDeps) -> FetchResult<CompletedJob> {
    let options = deps.sample;

    if job.dest.exists() && !options.overwrite {
        let dest = job.dest.clone();
        let checked =
            tokio::task::spawn_blocking(move || sample_sumstat(&dest, &dest, &options)).await?;
        let outcome = checked.map_err(|e| job.sample_error(e))?;
        return Ok(job.complete(outcome));
    }

    let raw = tempfile::Builder::new()
        .prefix(&format!(".{}-", sumstat_basename(&job.url)))
        .tempfile_in(&job.dir)
        .map_err(|e| FetchError::io(&job.dir, e))?;

    let bytes = deps.catalog.download_to(&job.url, raw.path()).await?;
    tracing::debug!(
        target: "gwasgene.fetch",
        url = %job.url,
        bytes,
        "Downloaded sumstat"
    );

    let dest = job.dest.clone();
    let sampled = tokio::task::spawn_blocking(move || {
        let result = sample_sumstat(raw.path(), &dest, &options);
        drop(raw);
        result
    })
    .await?;

    let outcome = sampled.map_err(|e| job.sample_error(e))?;
    Ok(job.complete(outcome))
}

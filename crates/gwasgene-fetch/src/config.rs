//! Pipeline configuration.

use std::path::{Path, PathBuf};

use gwasgene_core::SampleOptions;

/// Concurrent download-and-sample jobs.
pub const DEFAULT_DOWNLOAD_WORKERS: usize = 10;

/// Concurrent accession lookups.
pub const DEFAULT_QUERY_WORKERS: usize = 5;

/// Configuration for [`TestDataBuilder`](crate::TestDataBuilder).
///
/// # Example
///
/// ```
/// use gwasgene_fetch::FetchConfig;
///
/// let config = FetchConfig::new("tests/data")
///     .with_sample_size(500)
///     .with_download_workers(4);
/// assert_eq!(config.sample().rows, 500);
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    data_dir: PathBuf,
    sample: SampleOptions,
    download_workers: usize,
    query_workers: usize,
}

impl FetchConfig {
    /// Create a configuration writing into `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            sample: SampleOptions::default(),
            download_workers: DEFAULT_DOWNLOAD_WORKERS,
            query_workers: DEFAULT_QUERY_WORKERS,
        }
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Rows kept per sampled sumstat. Defaults to 1000.
    #[must_use]
    pub const fn with_sample_size(mut self, rows: usize) -> Self {
        self.sample.rows = rows;
        self
    }

    /// Sampling seed. Defaults to 42.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.sample.seed = seed;
        self
    }

    /// Resample files that already exist.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.sample.overwrite = overwrite;
        self
    }

    /// Maximum concurrent download jobs (at least 1).
    #[must_use]
    pub fn with_download_workers(mut self, workers: usize) -> Self {
        self.download_workers = workers.max(1);
        self
    }

    /// Maximum concurrent accession lookups (at least 1).
    #[must_use]
    pub fn with_query_workers(mut self, workers: usize) -> Self {
        self.query_workers = workers.max(1);
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub const fn sample(&self) -> SampleOptions {
        self.sample
    }

    pub const fn download_workers(&self) -> usize {
        self.download_workers
    }

    pub const fn query_workers(&self) -> usize {
        self.query_workers
    }
}

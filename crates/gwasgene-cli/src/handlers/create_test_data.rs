//! Create-test-data command handler.

use std::sync::Arc;

use anyhow::Result;
use gwasgene_fetch::{FetchConfig, FetchDeps, TestDataBuilder};

use crate::bootstrap::CliContext;
use crate::commands::SourceArgs;
use crate::error::CliError;
use crate::presentation::ProgressSink;

use super::sources_from;

/// Arguments for the create-test-data command.
pub struct CreateTestDataArgs<'a> {
    pub sources: &'a SourceArgs,
    pub overwrite: bool,
    pub rows: usize,
    pub seed: u64,
    pub workers: usize,
}

/// Build the fetch configuration for a run.
pub fn fetch_config(ctx: &CliContext, args: &CreateTestDataArgs<'_>) -> FetchConfig {
    FetchConfig::new(ctx.data_dir())
        .with_overwrite(args.overwrite)
        .with_sample_size(args.rows)
        .with_seed(args.seed)
        .with_download_workers(args.workers)
}

/// Execute the full pipeline: manifest, download, sample.
pub async fn execute(ctx: &CliContext, args: CreateTestDataArgs<'_>) -> Result<()> {
    let sources = sources_from(args.sources);
    let progress = Arc::new(ProgressSink::new());
    let deps = FetchDeps::new(Arc::clone(ctx.catalog())).with_events(progress.clone());
    let builder = TestDataBuilder::new(deps, fetch_config(ctx, &args));

    println!("Writing test data to {}", ctx.data_dir().display());
    let result = builder.create_test_data(&sources).await;
    progress.finish();

    let summary = result.map_err(CliError::from)?;
    println!(
        "Done: {} sampled, {} already present",
        summary.written(),
        summary.skipped()
    );
    Ok(())
}

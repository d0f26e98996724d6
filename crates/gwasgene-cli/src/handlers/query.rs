//! Query command handler.

use std::sync::Arc;

use anyhow::Result;
use gwasgene_fetch::{FetchConfig, FetchDeps, TestDataBuilder};

use crate::bootstrap::CliContext;
use crate::commands::SourceArgs;
use crate::error::CliError;
use crate::presentation::ProgressSink;

use super::sources_from;

/// Resolve sumstat URLs and write the manifest, overwriting any cached one.
pub async fn execute(ctx: &CliContext, args: &SourceArgs) -> Result<()> {
    let sources = sources_from(args);
    let deps = FetchDeps::new(Arc::clone(ctx.catalog())).with_events(Arc::new(ProgressSink::new()));
    let builder = TestDataBuilder::new(deps, FetchConfig::new(ctx.data_dir()));

    let manifest = builder
        .query_and_save(&sources)
        .await
        .map_err(CliError::from)?;

    println!(
        "Wrote {} URL(s) in {} group(s) to {}",
        manifest.url_count(),
        manifest.sources.len(),
        sources.manifest.display()
    );
    Ok(())
}

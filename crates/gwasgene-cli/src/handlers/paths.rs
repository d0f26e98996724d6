//! Paths command handler.
//!
//! Shows where test data and pipeline inputs are read from and written to.

use anyhow::Result;
use gwasgene_core::paths::{DATA_DIR_ENV, DataDirSource, repo_root};

use crate::bootstrap::{CliConfig, CliContext};

/// Render resolved paths in `key = value` form.
pub fn render(ctx: &CliContext) -> String {
    let source = match ctx.config.data_dir_source {
        DataDirSource::Explicit => "--data-dir",
        DataDirSource::Env => DATA_DIR_ENV,
        DataDirSource::Default => "default",
    };

    [
        format!("repo_root = {}", repo_root().display()),
        format!("data_dir = {} ({source})", ctx.data_dir().display()),
        format!("gcst_list = {}", CliConfig::default_gcst_list().display()),
        format!("manifest = {}", CliConfig::default_manifest().display()),
    ]
    .join("\n")
}

/// Execute the paths command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", render(ctx));
    Ok(())
}

//! FTP URL command handler.

use anyhow::Result;
use gwasgene_core::Accession;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Directory URL for an accession or study URL.
pub fn directory_for(ctx: &CliContext, gcst: &str) -> Result<String, CliError> {
    let accession = Accession::find_in(gcst).ok_or_else(|| {
        CliError::Config(format!("GCST URL does not contain GCST {}", gcst.trim()))
    })?;
    Ok(ctx.catalog().sumstat_directory(&accession))
}

/// Print the FTP directory, and optionally the sumstat file inside it.
pub async fn execute(ctx: &CliContext, gcst: &str, resolve: bool) -> Result<()> {
    let directory = directory_for(ctx, gcst)?;
    if !resolve {
        println!("{directory}");
        return Ok(());
    }

    let file = ctx
        .catalog()
        .sumstat_file_url(&directory)
        .await
        .map_err(|e| CliError::Unavailable(e.to_string()))?;
    println!("{file}");
    Ok(())
}

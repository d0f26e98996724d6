//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Validate gene-based GWAS summary statistics and build test data.
#[derive(Parser)]
#[command(name = "gwasgene")]
#[command(about = "Gene-based GWAS summary statistics toolkit")]
#[command(version = gwasgene_core::VERSION)]
pub struct Cli {
    /// Override the test data directory (else GWASGENE_DATA_DIR, else tests/data)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

//! Available commands.

use std::path::PathBuf;

use clap::Subcommand;

/// Commands of the `gwasgene` tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate gene-based sumstat files (plain or gzipped TSV)
    Validate {
        /// Files to validate; directories are searched for *.tsv.gz
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Maximum row errors reported per file
        #[arg(long, default_value_t = 10)]
        max_errors: usize,
        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build sampled test data from the GWAS Catalog
    CreateTestData {
        #[command(flatten)]
        sources: SourceArgs,
        /// Resample files that already exist
        #[arg(long)]
        overwrite: bool,
        /// Rows kept per sampled file
        #[arg(long, default_value_t = gwasgene_core::sampling::DEFAULT_SAMPLE_ROWS)]
        rows: usize,
        /// Sampling seed
        #[arg(long, default_value_t = gwasgene_core::sampling::DEFAULT_SEED)]
        seed: u64,
        /// Concurrent download jobs
        #[arg(long, default_value_t = gwasgene_fetch::DEFAULT_DOWNLOAD_WORKERS)]
        workers: usize,
    },

    /// Resolve sumstat URLs and write the manifest, without downloading
    Query {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Print the FTP directory of a GCST accession or study URL
    FtpUrl {
        /// Accession (GCST90082112) or any URL containing one
        gcst: String,
        /// Also resolve the sumstat file inside the directory
        #[arg(long)]
        resolve: bool,
    },

    /// Show resolved paths and defaults
    Paths,
}

/// Inputs shared by `create-test-data` and `query`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Curated accession list (defaults to scripts/gcsts.txt)
    #[arg(long, env = "GWASGENE_GCSTS")]
    pub gcsts: Option<PathBuf>,
    /// URL manifest (defaults to scripts/urls.json)
    #[arg(long, env = "GWASGENE_MANIFEST")]
    pub manifest: Option<PathBuf>,
    /// Publications to search instead of the built-in list
    #[arg(long = "pubmed-id", value_delimiter = ',')]
    pub pubmed_ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use crate::Cli;
    use crate::commands::Commands;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_validate_defaults() {
        let cli = Cli::parse_from(["gwasgene", "validate", "a.tsv.gz", "dir"]);
        match cli.command {
            Some(Commands::Validate {
                paths,
                max_errors,
                json,
            }) => {
                assert_eq!(paths, [PathBuf::from("a.tsv.gz"), PathBuf::from("dir")]);
                assert_eq!(max_errors, 10);
                assert!(!json);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_validate_requires_paths() {
        assert!(Cli::try_parse_from(["gwasgene", "validate"]).is_err());
    }

    #[test]
    fn test_create_test_data_options() {
        let cli = Cli::parse_from([
            "gwasgene",
            "create-test-data",
            "--gcsts",
            "list.txt",
            "--overwrite",
            "--rows",
            "50",
            "--seed",
            "7",
            "--pubmed-id",
            "1,2",
        ]);
        match cli.command {
            Some(Commands::CreateTestData {
                sources,
                overwrite,
                rows,
                seed,
                workers,
            }) => {
                assert_eq!(sources.gcsts, Some(PathBuf::from("list.txt")));
                assert_eq!(sources.pubmed_ids, [1, 2]);
                assert!(overwrite);
                assert_eq!(rows, 50);
                assert_eq!(seed, 7);
                assert_eq!(workers, 10);
            }
            _ => panic!("expected create-test-data"),
        }
    }

    #[test]
    fn test_create_test_data_defaults() {
        let cli = Cli::parse_from(["gwasgene", "create-test-data"]);
        match cli.command {
            Some(Commands::CreateTestData { rows, seed, .. }) => {
                assert_eq!(rows, 1000);
                assert_eq!(seed, 42);
            }
            _ => panic!("expected create-test-data"),
        }
    }
}

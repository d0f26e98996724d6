//! Command handlers.
//!
//! Handlers are thin: they turn CLI arguments into library calls and
//! format the results for the terminal.

pub mod create_test_data;
pub mod ftp_url;
pub mod paths;
pub mod query;
pub mod validate;

use gwasgene_fetch::TestDataSources;

use crate::bootstrap::CliConfig;
use crate::commands::SourceArgs;

/// Pipeline inputs from CLI arguments, falling back to repository defaults.
pub(crate) fn sources_from(args: &SourceArgs) -> TestDataSources {
    let gcsts = args.gcsts.clone().unwrap_or_else(CliConfig::default_gcst_list);
    let manifest = args.manifest.clone().unwrap_or_else(CliConfig::default_manifest);
    let sources = TestDataSources::new(gcsts, manifest);
    if args.pubmed_ids.is_empty() {
        sources
    } else {
        sources.with_pubmed_ids(args.pubmed_ids.clone())
    }
}

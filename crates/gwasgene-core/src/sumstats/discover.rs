//! Locate sumstat files on disk.

use std::io;
use std::path::{Path, PathBuf};

/// Extension used for compressed sumstat files.
pub const SUMSTAT_SUFFIX: &str = ".tsv.gz";

/// List the `*.tsv.gz` files directly inside `dir`, sorted by path.
pub fn find_sumstats(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(SUMSTAT_SUFFIX))
        })
        .collect();

    files.sort();
    Ok(files)
}

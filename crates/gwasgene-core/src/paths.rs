//! Path resolution for test data and pipeline inputs.

use std::path::{Path, PathBuf};

/// Environment variable overriding the test data directory.
pub const DATA_DIR_ENV: &str = "GWASGENE_DATA_DIR";

/// Default curated accession list, relative to the repository root.
pub const DEFAULT_GCST_LIST_RELATIVE: &str = "scripts/gcsts.txt";

/// Default URL manifest, relative to the repository root.
pub const DEFAULT_MANIFEST_RELATIVE: &str = "scripts/urls.json";

/// Default test data directory, relative to the repository root.
pub const DEFAULT_DATA_DIR_RELATIVE: &str = "tests/data";

/// Repository root, fixed at build time.
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("GWASGENE_REPO_ROOT"))
}

/// Where the test data directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirSource {
    /// Passed explicitly (CLI flag).
    Explicit,
    /// Read from `GWASGENE_DATA_DIR`.
    Env,
    /// Repository default.
    Default,
}

/// Resolve the test data directory.
///
/// Precedence: explicit override, then `GWASGENE_DATA_DIR`, then
/// `<repo root>/tests/data`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> (PathBuf, DataDirSource) {
    resolve_data_dir_with(explicit, std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

fn resolve_data_dir_with(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
) -> (PathBuf, DataDirSource) {
    if let Some(path) = explicit {
        return (path.to_path_buf(), DataDirSource::Explicit);
    }
    match env_value {
        Some(path) if !path.as_os_str().is_empty() => (path, DataDirSource::Env),
        _ => (
            repo_root().join(DEFAULT_DATA_DIR_RELATIVE),
            DataDirSource::Default,
        ),
    }
}

/// Directory for one group of sumstats (`<data dir>/<id>`).
pub fn study_dir(data_dir: &Path, id: &str) -> PathBuf {
    data_dir.join(id)
}

/// Create a directory (and parents) if it is missing.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

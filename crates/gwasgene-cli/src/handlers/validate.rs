//! Validate command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;
use gwasgene_core::{ValidationReport, find_sumstats, validate_file};
use serde_json::json;

use crate::error::CliError;
use crate::presentation::format_report;

/// Result of validating one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read; it may still contain invalid rows.
    Checked(ValidationReport),
    /// The file could not be read as a sumstat.
    Unreadable { path: PathBuf, error: CliError },
}

impl FileOutcome {
    pub const fn is_ok(&self) -> bool {
        match self {
            Self::Checked(report) => report.is_ok(),
            Self::Unreadable { .. } => false,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Checked(report) => json!({
                "path": report.path,
                "ok": report.is_ok(),
                "rows": report.rows,
                "valid": report.valid,
                "invalid": report.invalid(),
                "errors": report.errors,
            }),
            Self::Unreadable { path, error } => json!({
                "path": path,
                "ok": false,
                "error": error.to_string(),
            }),
        }
    }
}

/// Expand directories into the sumstat files they contain.
pub fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = find_sumstats(path)?;
            if found.is_empty() {
                tracing::warn!(dir = %path.display(), "No *.tsv.gz files found");
            }
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Validate a single file.
pub fn check_file(path: &Path, max_errors: usize) -> FileOutcome {
    match validate_file(path, max_errors) {
        Ok(report) => FileOutcome::Checked(report),
        Err(e) => FileOutcome::Unreadable {
            path: path.to_path_buf(),
            error: e.into(),
        },
    }
}

/// Execute the validate command.
///
/// Fails with [`CliError::InvalidData`] when any file has invalid rows or
/// cannot be read.
pub fn execute(paths: &[PathBuf], max_errors: usize, json: bool) -> Result<()> {
    let files = expand_paths(paths)?;
    if files.is_empty() {
        return Err(CliError::Io("no sumstat files to validate".to_string()).into());
    }

    let outcomes: Vec<FileOutcome> = files.iter().map(|f| check_file(f, max_errors)).collect();
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();

    if json {
        let values: Vec<_> = outcomes.iter().map(FileOutcome::to_json).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for outcome in &outcomes {
            match outcome {
                FileOutcome::Checked(report) => print!("{}", format_report(report)),
                FileOutcome::Unreadable { path, error } => {
                    println!("FAIL {}: {error}", path.display());
                }
            }
        }
        println!();
        println!("{} file(s) checked, {failed} failed", outcomes.len());
    }

    if failed > 0 {
        return Err(CliError::InvalidData { files: failed }.into());
    }
    Ok(())
}

//! Whole-file validation.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::{RowError, SumstatError, SumstatResult};
use super::reader::SumstatReader;

/// Outcome of validating every row of a sumstat file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// The validated file.
    pub path: PathBuf,
    /// Number of data rows read (blank lines excluded).
    pub rows: usize,
    /// Number of rows that passed validation.
    pub valid: usize,
    /// Retained row errors, at most `max_errors` of them.
    pub errors: Vec<RowError>,
}

impl ValidationReport {
    /// Number of rows that failed validation.
    pub const fn invalid(&self) -> usize {
        self.rows - self.valid
    }

    /// True when every row passed.
    pub const fn is_ok(&self) -> bool {
        self.rows == self.valid
    }

    /// True when more errors occurred than were retained.
    pub fn is_truncated(&self) -> bool {
        self.invalid() > self.errors.len()
    }
}

/// Validate every row of a sumstat file.
///
/// Row failures are counted and the first `max_errors` are kept. Failures
/// that prevent reading the file at all (missing columns, IO) are returned
/// as errors.
pub fn validate_file(path: &Path, max_errors: usize) -> SumstatResult<ValidationReport> {
    let reader = SumstatReader::open(path)?;
    let report = validate_reader(reader, path, max_errors)?;

    tracing::debug!(
        path = %path.display(),
        rows = report.rows,
        invalid = report.invalid(),
        "Validated sumstat file"
    );
    Ok(report)
}

/// Validate rows from an already-open reader.
pub fn validate_reader<R: BufRead>(
    reader: SumstatReader<R>,
    path: &Path,
    max_errors: usize,
) -> SumstatResult<ValidationReport> {
    let mut report = ValidationReport {
        path: path.to_path_buf(),
        rows: 0,
        valid: 0,
        errors: Vec::new(),
    };

    for row in reader.records() {
        report.rows += 1;
        match row {
            Ok(_) => report.valid += 1,
            Err(SumstatError::InvalidRow(err)) => {
                if report.errors.len() < max_errors {
                    report.errors.push(err);
                }
            }
            Err(other) => return Err(other),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn report_for(input: &str, max_errors: usize) -> ValidationReport {
        let reader = SumstatReader::from_reader(Cursor::new(input.to_string())).unwrap();
        validate_reader(reader, Path::new("memory.tsv"), max_errors).unwrap()
    }

    #[test]
    fn test_all_valid() {
        let report = report_for(
            "gene_name\tchromosome\tbase_pair_location\tp_value\nA\t1\t10\t0.2\nB\t2\t20\t0.3\n",
            10,
        );
        assert!(report.is_ok());
        assert_eq!(report.rows, 2);
        assert_eq!(report.invalid(), 0);
    }

    #[test]
    fn test_errors_are_capped() {
        let mut input = String::from("Name\tchromosome\tbase_pair_location\tp_value\n");
        for _ in 0..5 {
            input.push_str("G\t1\t0\t0.5\n");
        }
        input.push_str("G\t1\t3\t0.5\n");

        let report = report_for(&input, 2);
        assert!(!report.is_ok());
        assert_eq!(report.rows, 6);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid(), 5);
        assert_eq!(report.errors.len(), 2);
        assert!(report.is_truncated());
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[1].line, 3);
    }

    #[test]
    fn test_report_serializes() {
        let report = report_for(
            "Name\tchromosome\tbase_pair_location\tp_value\nA\t1\t10\t7\n",
            10,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"], 1);
        assert_eq!(json["errors"][0]["line"], 2);
        assert_eq!(json["errors"][0]["error"]["errors"][0]["field"], "p_value");
        assert_eq!(
            json["errors"][0]["error"]["errors"][0]["kind"],
            "greater_than_one"
        );
    }
}

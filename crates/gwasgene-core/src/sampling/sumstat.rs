//! Reproducible row sampling of tabular files into gzipped TSV.

use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::NamedTempFile;

use crate::sumstats::{SumstatError, SumstatResult, open_text};

use super::reservoir::{DEFAULT_SAMPLE_ROWS, DEFAULT_SEED, Reservoir};

/// Options for [`sample_sumstat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Number of data rows to keep.
    pub rows: usize,
    /// RNG seed.
    pub seed: u64,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SAMPLE_ROWS,
            seed: DEFAULT_SEED,
            overwrite: false,
        }
    }
}

/// What [`sample_sumstat`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// A new sample was written.
    Written {
        /// Data rows in the output
        sampled: usize,
        /// Data rows in the input
        total: usize,
    },
    /// The output already existed and was left in place.
    Skipped,
}

/// Sample rows of `input` into a gzipped TSV at `output`.
///
/// The header is always kept. Existing output is left alone unless
/// `options.overwrite` is set. Either way the output must end up with a
/// header and at least one data row; if not, it is deleted and
/// [`SumstatError::EmptyOutput`] is returned.
pub fn sample_sumstat(
    input: &Path,
    output: &Path,
    options: &SampleOptions,
) -> SumstatResult<SampleOutcome> {
    let outcome = if output.exists() && !options.overwrite {
        tracing::info!(path = %output.display(), "File already exists, skipping");
        SampleOutcome::Skipped
    } else {
        write_sample(input, output, options)?
    };

    if !is_sumstat_ok(output)? {
        tracing::warn!(
            input = %input.display(),
            output = %output.display(),
            "Deleting sampled sumstat with no data rows"
        );
        std::fs::remove_file(output)?;
        return Err(SumstatError::EmptyOutput {
            path: output.to_path_buf(),
        });
    }

    Ok(outcome)
}

/// Whether a (possibly gzipped) file has a header and at least one row.
pub fn is_sumstat_ok(path: &Path) -> SumstatResult<bool> {
    let mut lines = 0;
    for line in open_text(path)?.lines().take(2) {
        line?;
        lines += 1;
    }
    Ok(lines >= 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    fn sniff(header: &str) -> Self {
        if !header.contains('\t') && header.contains(',') {
            Self::Comma
        } else {
            Self::Tab
        }
    }

    fn to_tsv(self, line: &str) -> String {
        match self {
            Self::Tab => line.to_string(),
            Self::Comma => line
                .split(',')
                .map(|cell| cell.trim_matches('"'))
                .collect::<Vec<_>>()
                .join("\t"),
        }
    }
}

fn write_sample(
    input: &Path,
    output: &Path,
    options: &SampleOptions,
) -> SumstatResult<SampleOutcome> {
    let mut lines = open_text(input)?.lines();

    let mut header = None;
    for line in lines.by_ref() {
        let line = line?;
        if !line.trim().is_empty() {
            header = Some(line);
            break;
        }
    }

    let mut reservoir = Reservoir::new(options.rows, options.seed);
    let delimiter = header.as_deref().map_or(Delimiter::Tab, Delimiter::sniff);
    if header.is_some() {
        for line in lines {
            let line = line?;
            if !line.trim().is_empty() {
                reservoir.push(line);
            }
        }
    }

    let total = reservoir.seen();
    let rows = reservoir.into_inner();
    let sampled = rows.len();

    let dir = output.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut encoder = GzEncoder::new(BufWriter::new(tmp.as_file()), Compression::default());
        if let Some(header) = &header {
            writeln!(encoder, "{}", delimiter.to_tsv(header))?;
            for row in &rows {
                writeln!(encoder, "{}", delimiter.to_tsv(row))?;
            }
        }
        encoder.finish()?.flush()?;
    }
    tmp.persist(output).map_err(|e| e.error)?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        sampled,
        total,
        "Wrote sumstat sample"
    );
    Ok(SampleOutcome::Written { sampled, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sumstats::{SumstatReader, validate_file};
    use std::fs::File;
    use std::io::Read;

    fn write_gz(path: &Path, content: &str) {
        let file = File::create(path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
    }

    fn read_gz(path: &Path) -> String {
        let mut out = String::new();
        flate2::read::GzDecoder::new(File::open(path).unwrap())
            .read_to_string(&mut out)
            .unwrap();
        out
    }

    fn sumstat_with_rows(n: usize) -> String {
        let mut content = String::from("Name\tchromosome\tbase_pair_location\tp_value\n");
        for i in 1..=n {
            content.push_str(&format!("GENE{i}\t1\t{i}\t0.5\n"));
        }
        content
    }

    #[test]
    fn test_sample_keeps_header_and_caps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.tsv.gz");
        let output = dir.path().join("out/sample.tsv.gz");
        write_gz(&input, &sumstat_with_rows(50));

        let options = SampleOptions {
            rows: 10,
            ..SampleOptions::default()
        };
        let outcome = sample_sumstat(&input, &output, &options).unwrap();
        assert_eq!(
            outcome,
            SampleOutcome::Written {
                sampled: 10,
                total: 50
            }
        );

        let text = read_gz(&output);
        assert!(text.starts_with("Name\tchromosome\tbase_pair_location\tp_value\n"));
        assert_eq!(text.lines().count(), 11);

        let report = validate_file(&output, 10).unwrap();
        assert!(report.is_ok());
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.tsv");
        std::fs::write(&input, sumstat_with_rows(200)).unwrap();

        let options = SampleOptions {
            rows: 20,
            overwrite: true,
            ..SampleOptions::default()
        };
        let first = dir.path().join("a.tsv.gz");
        let second = dir.path().join("b.tsv.gz");
        sample_sumstat(&input, &first, &options).unwrap();
        sample_sumstat(&input, &second, &options).unwrap();

        assert_eq!(read_gz(&first), read_gz(&second));
    }

    #[test]
    fn test_existing_output_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.tsv");
        let output = dir.path().join("sample.tsv.gz");
        std::fs::write(&input, sumstat_with_rows(5)).unwrap();
        write_gz(&output, &sumstat_with_rows(2));

        let outcome = sample_sumstat(&input, &output, &SampleOptions::default()).unwrap();
        assert_eq!(outcome, SampleOutcome::Skipped);
        assert_eq!(read_gz(&output).lines().count(), 3);
    }

    #[test]
    fn test_overwrite_replaces_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.tsv");
        let output = dir.path().join("sample.tsv.gz");
        std::fs::write(&input, sumstat_with_rows(5)).unwrap();
        write_gz(&output, &sumstat_with_rows(2));

        let options = SampleOptions {
            overwrite: true,
            ..SampleOptions::default()
        };
        let outcome = sample_sumstat(&input, &output, &options).unwrap();
        assert!(matches!(outcome, SampleOutcome::Written { total: 5, .. }));
        assert_eq!(read_gz(&output).lines().count(), 6);
    }

    #[test]
    fn test_header_only_input_is_rejected_and_removed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.tsv");
        let output = dir.path().join("sample.tsv.gz");
        std::fs::write(&input, sumstat_with_rows(0)).unwrap();

        let err = sample_sumstat(&input, &output, &SampleOptions::default()).unwrap_err();
        assert!(matches!(err, SumstatError::EmptyOutput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_empty_existing_output_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.tsv");
        let output = dir.path().join("sample.tsv.gz");
        std::fs::write(&input, sumstat_with_rows(3)).unwrap();
        write_gz(&output, "Name\tchromosome\tbase_pair_location\tp_value\n");

        let err = sample_sumstat(&input, &output, &SampleOptions::default()).unwrap_err();
        assert!(matches!(err, SumstatError::EmptyOutput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_comma_input_is_converted_to_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("sample.tsv.gz");
        std::fs::write(
            &input,
            "gene_name,chromosome,base_pair_location,p_value\n\"IL6\",7,22727200,0.004\n",
        )
        .unwrap();

        sample_sumstat(&input, &output, &SampleOptions::default()).unwrap();
        let reader = SumstatReader::open(&output).unwrap();
        let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "IL6");
    }

    #[test]
    fn test_is_sumstat_ok() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.tsv.gz");
        let bad = dir.path().join("bad.tsv.gz");
        write_gz(&good, "h\nrow\n");
        write_gz(&bad, "h\n");

        assert!(is_sumstat_ok(&good).unwrap());
        assert!(!is_sumstat_ok(&bad).unwrap());
    }
}

//! Streaming reader for gene-based sumstat files.
//!
//! Files may be plain or gzip compressed TSV. Compression is detected from
//! the magic bytes, so a misnamed file still reads correctly.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::domain::{Field, GeneRecord, RecordFields};

use super::columns::ColumnMap;
use super::error::{RowError, SumstatError, SumstatResult};

/// First two bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Boxed line reader over a plain or decompressed file.
pub type TextReader = Box<dyn BufRead + Send>;

/// Open a text file, transparently decompressing gzip content.
///
/// Multi-member gzip streams (bgzip output) are read in full.
pub fn open_text(path: &Path) -> SumstatResult<TextReader> {
    let file = File::open(path).map_err(|source| SumstatError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        tracing::trace!(path = %path.display(), "Detected gzip input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Reader that yields validated [`GeneRecord`]s from a sumstat file.
pub struct SumstatReader<R: BufRead> {
    lines: Lines<R>,
    header: Vec<String>,
    columns: ColumnMap,
    line: usize,
}

impl SumstatReader<TextReader> {
    /// Open a sumstat file from disk.
    pub fn open(path: &Path) -> SumstatResult<Self> {
        Self::from_reader(open_text(path)?)
    }
}

impl<R: BufRead> SumstatReader<R> {
    /// Read the header from `reader` and prepare to stream rows.
    pub fn from_reader(reader: R) -> SumstatResult<Self> {
        let mut lines = reader.lines();
        let mut line = 0;

        let header = loop {
            let Some(next) = lines.next() else {
                return Err(SumstatError::Empty);
            };
            line += 1;
            let next = next?;
            if !next.trim().is_empty() {
                break next;
            }
        };

        let header: Vec<String> = header
            .trim_start_matches('\u{feff}')
            .split('\t')
            .map(|col| col.trim().to_string())
            .collect();
        let columns = ColumnMap::resolve(&header)?;

        Ok(Self {
            lines,
            header,
            columns,
            line,
        })
    }

    /// Header columns, in file order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Iterate over the remaining rows.
    ///
    /// Invalid rows surface as [`SumstatError::InvalidRow`]; the iteration can
    /// continue past them. IO errors are also yielded and should end the scan.
    pub fn records(self) -> Records<R> {
        Records { reader: self }
    }

    fn parse_row(&self, row: &str) -> Result<GeneRecord, RowError> {
        let cells: Vec<&str> = row.split('\t').collect();
        let cell = |field: Field| cells.get(self.columns.index(field)).copied();

        GeneRecord::from_fields(RecordFields {
            name: cell(Field::Name),
            chromosome: cell(Field::Chromosome),
            position: cell(Field::Position),
            p_value: cell(Field::PValue),
        })
        .map_err(|error| RowError {
            line: self.line,
            error,
        })
    }
}

/// Iterator over the rows of a [`SumstatReader`].
pub struct Records<R: BufRead> {
    reader: SumstatReader<R>,
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = SumstatResult<GeneRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.reader.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.reader.line += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(
                self.reader
                    .parse_row(&line)
                    .map_err(SumstatError::InvalidRow),
            );
        }
    }
}

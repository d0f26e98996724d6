//! Gene-based sumstat files: reading, validation and discovery.

mod columns;
mod discover;
mod error;
mod reader;
mod report;

pub use columns::ColumnMap;
pub use discover::{SUMSTAT_SUFFIX, find_sumstats};
pub use error::{RowError, SumstatError, SumstatResult};
pub use reader::{Records, SumstatReader, TextReader, open_text};
pub use report::{ValidationReport, validate_file, validate_reader};

#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod manifest;
pub mod paths;
pub mod ports;
pub mod sampling;
pub mod sumstats;

/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types for convenience
pub use catalog::{Accession, StudyLink, directory_range, ftp_directory_url, is_gene_based};
pub use domain::{Field, FieldError, FieldErrorKind, GeneRecord, RecordFields, ValidationError};
pub use manifest::{Manifest, ManifestError, SumstatSource, read_accession_list};
pub use ports::{CatalogClientPort, CatalogPortError, CatalogPortResult};
pub use sampling::{SampleOptions, SampleOutcome, reservoir_sample, sample_sumstat};
pub use sumstats::{
    RowError, SumstatError, SumstatReader, SumstatResult, ValidationReport, find_sumstats,
    validate_file,
};

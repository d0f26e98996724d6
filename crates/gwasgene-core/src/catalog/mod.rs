//! GWAS Catalog conventions shared by the client and the fetch pipeline.

mod ftp;
mod study;

pub use ftp::{
    Accession, DEFAULT_FTP_BASE_URL, directory_range, find_tsv_link, ftp_directory_url,
    sumstat_basename,
};
pub use study::{GENE_BASED_MARKERS, StudyLink, is_gene_based};

//! GWAS Catalog FTP layout.
//!
//! Summary statistics are published under directories that bucket
//! accessions in blocks of 1000, e.g. `GCST90082001-GCST90083000/GCST90082112`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default root of the summary statistics FTP mirror (served over HTTP).
pub const DEFAULT_FTP_BASE_URL: &str = "http://ftp.ebi.ac.uk/pub/databases/gwas/summary_statistics";

/// Size of one accession bucket on the FTP server.
const BUCKET_SIZE: u64 = 1000;

static ACCESSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GCST(\d+)").expect("accession pattern is valid"));

static TSV_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href="([^"]+\.(?:tsv\.gz|tsv))""#).expect("TSV link pattern is valid")
});

/// A GWAS Catalog study accession, e.g. `GCST90082112`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Accession {
    id: String,
    number: u64,
}

impl Accession {
    /// Find the first accession inside a URL or free text.
    pub fn find_in(text: &str) -> Option<Self> {
        let caps = ACCESSION_RE.captures(text)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        Some(Self {
            id: caps.get(0)?.as_str().to_string(),
            number,
        })
    }

    /// The accession string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Numeric part of the accession.
    pub const fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl TryFrom<String> for Accession {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::find_in(&value).ok_or_else(|| format!("not a GCST accession: {value}"))
    }
}

impl From<Accession> for String {
    fn from(value: Accession) -> Self {
        value.id
    }
}

/// Bounds of the FTP bucket holding accession number `n`.
///
/// ```
/// use gwasgene_core::catalog::directory_range;
///
/// assert_eq!(directory_range(90_083_565), (90_083_001, 90_084_000));
/// assert_eq!(directory_range(90_083_000), (90_082_001, 90_083_000));
/// ```
pub const fn directory_range(n: u64) -> (u64, u64) {
    let n = if n % BUCKET_SIZE == 0 {
        n.saturating_sub(1)
    } else {
        n
    };
    let lower = (n / BUCKET_SIZE) * BUCKET_SIZE + 1;
    let upper = (n / BUCKET_SIZE + 1) * BUCKET_SIZE;
    (lower, upper)
}

/// URL of the FTP directory holding an accession's summary statistics.
pub fn ftp_directory_url(base_url: &str, accession: &Accession) -> String {
    let (lower, upper) = directory_range(accession.number());
    format!(
        "{}/GCST{lower:08}-GCST{upper:08}/{accession}",
        base_url.trim_end_matches('/')
    )
}

/// First TSV (optionally gzipped) link in an HTML directory listing.
pub fn find_tsv_link(listing: &str) -> Option<&str> {
    TSV_LINK_RE
        .captures(listing)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// File stem of a sumstat URL: the last path segment up to its first `.`.
pub fn sumstat_basename(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url).trim();
    last.split('.').next().unwrap_or(last)
}

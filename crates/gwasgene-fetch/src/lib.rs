#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod download;
mod error;
mod events;
mod pipeline;
mod query;

pub use config::{DEFAULT_DOWNLOAD_WORKERS, DEFAULT_QUERY_WORKERS, FetchConfig};
pub use download::{CompletedJob, FetchSummary, SampleJob};
pub use error::{FetchError, FetchResult};
pub use events::{FetchEvent, FetchEventSink, NoopEventSink};
pub use pipeline::{FetchDeps, PUBMED_IDS, TestDataBuilder, TestDataSources};

// Silence unused dev-dependency warnings
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use flate2 as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;

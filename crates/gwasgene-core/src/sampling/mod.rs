//! Reproducible sampling of sumstat files.

mod reservoir;
mod sumstat;

pub use reservoir::{DEFAULT_SAMPLE_ROWS, DEFAULT_SEED, Reservoir, reservoir_sample};
pub use sumstat::{SampleOptions, SampleOutcome, is_sumstat_ok, sample_sumstat};

//! Shared CLI presentation utilities.
//!
//! Format-only: no domain logic lives here.

pub mod progress;
pub mod report;

pub use progress::ProgressSink;
pub use report::{format_report, truncate_string};

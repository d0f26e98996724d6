//! Progress events emitted by the pipeline.

use std::path::PathBuf;

use gwasgene_core::SampleOutcome;

/// Something observable happened in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// A group of sumstat URLs was resolved.
    SourceResolved { id: String, urls: usize },
    /// Download jobs were scheduled.
    JobsQueued { total: usize },
    /// A job wrote or kept its sample.
    JobFinished { dest: PathBuf, outcome: SampleOutcome },
}

/// Receiver for [`FetchEvent`]s (progress bars, logs).
///
/// Emission happens on worker tasks and must not block.
pub trait FetchEventSink: Send + Sync {
    fn emit(&self, event: FetchEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl FetchEventSink for NoopEventSink {
    fn emit(&self, _event: FetchEvent) {}
}

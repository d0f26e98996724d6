//! Progress display for the test data pipeline.

use std::io::IsTerminal;
use std::sync::Mutex;

use gwasgene_core::SampleOutcome;
use gwasgene_fetch::{FetchEvent, FetchEventSink};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Event sink that drives an indicatif progress bar.
///
/// The bar is hidden when stderr is not a terminal; events are still logged.
pub struct ProgressSink {
    bar: Mutex<Option<ProgressBar>>,
    visible: bool,
}

impl ProgressSink {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            visible: std::io::stderr().is_terminal(),
        }
    }

    fn new_bar(&self, total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        if !self.visible {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
        {
            bar.set_style(style);
        }
        bar
    }

    /// Finish and clear the bar.
    pub fn finish(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl Default for ProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchEventSink for ProgressSink {
    fn emit(&self, event: FetchEvent) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        match event {
            FetchEvent::SourceResolved { id, urls } => {
                tracing::info!(source = %id, urls, "Resolved sumstat URLs");
            }
            FetchEvent::JobsQueued { total } => {
                *guard = Some(self.new_bar(total));
            }
            FetchEvent::JobFinished { dest, outcome } => {
                let name = dest
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let verb = match outcome {
                    SampleOutcome::Written { .. } => "sampled",
                    SampleOutcome::Skipped => "kept",
                };
                if let Some(bar) = guard.as_ref() {
                    bar.set_message(format!("{verb} {name}"));
                    bar.inc(1);
                }
            }
        }
    }
}

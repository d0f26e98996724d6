//! Concurrent download-and-sample of manifest URLs.

mod job;

use std::sync::Arc;

use tokio::task::JoinSet;

use gwasgene_core::SampleOutcome;

use crate::error::{FetchError, FetchResult};
use crate::events::{FetchEvent, FetchEventSink};

pub use job::{CompletedJob, SampleJob};
pub(crate) use job::{WorkerDeps, run_job};

/// Result of a download run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Finished jobs, in completion order.
    pub completed: Vec<CompletedJob>,
}

impl FetchSummary {
    /// Jobs that wrote a new sample.
    pub fn written(&self) -> usize {
        self.completed
            .iter()
            .filter(|c| matches!(c.outcome, SampleOutcome::Written { .. }))
            .count()
    }

    /// Jobs that kept an existing sample.
    pub fn skipped(&self) -> usize {
        self.completed
            .iter()
            .filter(|c| c.outcome == SampleOutcome::Skipped)
            .count()
    }
}

/// Run `jobs` with at most `workers` in flight.
///
/// Every job runs to completion; if any failed, the first failure (in
/// completion order) is returned.
pub(crate) async fn run_jobs(
    jobs: Vec<SampleJob>,
    deps: WorkerDeps,
    workers: usize,
    events: Arc<dyn FetchEventSink>,
) -> FetchResult<FetchSummary> {
    events.emit(FetchEvent::JobsQueued { total: jobs.len() });

    let deps = Arc::new(deps);
    let mut set = JoinSet::new();
    let mut summary = FetchSummary::default();
    let mut first_error: Option<FetchError> = None;

    let mut settle = |joined: Result<FetchResult<CompletedJob>, tokio::task::JoinError>| {
        match joined.map_err(FetchError::from).and_then(|result| result) {
            Ok(done) => {
                events.emit(FetchEvent::JobFinished {
                    dest: done.job.dest.clone(),
                    outcome: done.outcome,
                });
                summary.completed.push(done);
            }
            Err(e) => {
                tracing::error!(target: "gwasgene.fetch", error = %e, "Sumstat job failed");
                first_error.get_or_insert(e);
            }
        }
    };

    for job in jobs {
        while set.len() >= workers.max(1) {
            if let Some(joined) = set.join_next().await {
                settle(joined);
            }
        }
        let deps = Arc::clone(&deps);
        set.spawn(async move { run_job(job, &deps).await });
    }

    while let Some(joined) = set.join_next().await {
        settle(joined);
    }
    drop(settle);

    match first_error {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}

//! Bounded-concurrency fan-out over the universe.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sakata_traits::{Issue, RejectionKind, ValuationResult};
use tokio::sync::Semaphore;

use crate::evaluator::Evaluator;
use crate::tally::RunTally;

/// Runner configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Width of the worker pool. Wider pools trade upstream load for
    /// wall-clock time; 4–20 are the values used in practice.
    pub workers: usize,
    /// Emit a progress log line every this many completions.
    pub progress_every: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workers: 20,
            progress_every: 25,
        }
    }
}

/// Drives one evaluator invocation per issue under a bounded worker pool.
///
/// The runner is a synchronization barrier: it returns only after every
/// issue has produced exactly one result. The [`RunTally`] is the sole
/// shared mutable state and is only touched under its mutex.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineRunner {
    config: RunnerConfig,
}

impl PipelineRunner {
    /// Create a runner with the given configuration.
    #[must_use]
    pub const fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Evaluate the whole universe and account every outcome.
    ///
    /// An empty universe is a normal terminal case and returns an empty
    /// tally immediately. A worker that dies (panics) is accounted as
    /// `Rejected(Unknown)` for its issue rather than aborting the run.
    pub async fn run(&self, universe: Vec<Issue>, evaluator: Arc<Evaluator>) -> RunTally {
        if universe.is_empty() {
            tracing::info!("universe is empty; nothing to evaluate");
            return RunTally::default();
        }

        let total = universe.len();
        tracing::info!(total, workers = self.config.workers, "evaluating universe");

        let semaphore = Arc::new(Semaphore::new(self.config.workers.max(1)));
        let tally = Arc::new(Mutex::new(RunTally::default()));
        let completed = Arc::new(AtomicUsize::new(0));
        let progress_every = self.config.progress_every.max(1);

        let mut handles = Vec::with_capacity(total);
        for issue in universe {
            let semaphore = Arc::clone(&semaphore);
            let tally = Arc::clone(&tally);
            let completed = Arc::clone(&completed);
            let evaluator = Arc::clone(&evaluator);
            let symbol = issue.symbol.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore is never closed");

                let result = evaluator.evaluate(&issue).await;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;

                if !result.is_success() {
                    tracing::debug!(symbol = %issue.symbol, result = ?result, "issue rejected");
                }
                if done % progress_every == 0 || done == total {
                    tracing::info!("[{done}/{total}] evaluated");
                }

                tally
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .record(result);
            });
            handles.push((symbol, handle));
        }

        for (symbol, handle) in handles {
            if let Err(join_err) = handle.await {
                // The task died before recording its result; keep the
                // one-result-per-issue invariant by accounting it here.
                tally
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .record(ValuationResult::Rejected {
                        symbol,
                        reason: RejectionKind::Unknown(format!("worker failed: {join_err}")),
                    });
            }
        }

        Arc::into_inner(tally)
            .expect("all workers joined")
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

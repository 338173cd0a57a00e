//! Fan-out of the conversion pipeline over a bounded worker pool.
//!
//! Items are independent (disjoint directories), so the pool needs no
//! coordination beyond a concurrency cap. A dispatched batch runs to
//! completion; there is no cancellation and no per-tool timeout.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::config::{Config, Tools};
use crate::convert;
use crate::discovery;

/// Number of concurrent items: available parallelism minus two, floor one.
pub fn worker_count() -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    available.saturating_sub(2).max(1)
}

/// Progress counters for a batch run.
#[derive(Debug)]
pub struct BatchProgress {
    pub completed: AtomicUsize,
    pub failed: AtomicUsize,
    pub total: usize,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            total,
        }
    }

    pub fn increment_completed(&self) -> usize {
        self.completed.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn increment_failed(&self) -> usize {
        self.failed.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }
}

/// Discover every album under `root` and convert them all.
///
/// Waits for the whole batch; returns `(completed, failed)`. Failures are
/// already logged by the pipeline, so callers only need the counts.
pub async fn run_batch(root: &Path, config: Config, tools: Tools) -> (usize, usize) {
    let items = discovery::find_work_items(root);
    let workers = worker_count();

    log::info!("Using {} workers", workers);
    log::info!("Found {} image+cue pairs", items.len());

    let progress = Arc::new(BatchProgress::new(items.len()));
    let semaphore = Arc::new(Semaphore::new(workers));
    let config = Arc::new(config);
    let tools = Arc::new(tools);

    let mut tasks = FuturesUnordered::new();

    for item in items {
        let permit = semaphore.clone().acquire_owned().await.unwrap();
        let progress = progress.clone();
        let config = config.clone();
        let tools = tools.clone();

        tasks.push(tokio::spawn(async move {
            let outcome = convert::convert_item(&item, &config, &tools).await;

            if outcome.success {
                let count = progress.increment_completed();
                log::info!(
                    "Completed ({}/{}): {}",
                    count,
                    progress.total,
                    outcome.image_path.display()
                );
            } else {
                progress.increment_failed();
            }

            drop(permit);
            outcome
        }));
    }

    while let Some(_outcome) = tasks.next().await {}

    (progress.completed_count(), progress.failed_count())
}

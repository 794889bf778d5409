//! Simulation Engine
//!
//! Dispatches one task per requested book id and gathers their outcomes.
//!
//! ## Responsibilities
//! - **Fan-out**: spawning an independent task for every id, duplicates included.
//! - **Reading**: looking the book up and, if it exists, waiting the batch duration.
//! - **Fan-in**: returning once the `ResultAggregator` holds one outcome per id.
//!
//! Lookup failures never escape as errors; they become not-found outcomes.

use super::aggregator::ResultAggregator;
use super::types::ReadingOutcome;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::BookId;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::Instant;
use uuid::Uuid;

/// Runs reading simulations against a shared catalog.
#[derive(Clone)]
pub struct SimulationEngine {
    /// Read-only catalog shared by every task.
    catalog: Arc<dyn CatalogStore>,
    /// Optional cap on tasks running at once. `None` means unbounded.
    limiter: Option<Arc<Semaphore>>,
    max_concurrency: Option<usize>,
}

impl SimulationEngine {
    /// Creates an engine with unbounded concurrency.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog,
            limiter: None,
            max_concurrency: None,
        }
    }

    /// Caps how many tasks may look up and read at the same time.
    ///
    /// Every id still gets its own task and its own outcome; tasks over the limit
    /// wait for a slot before starting. A limit of 0 is raised to 1.
    pub fn with_concurrency_limit(mut self, max_concurrency: usize) -> Self {
        let max_concurrency = max_concurrency.max(1);
        self.limiter = Some(Arc::new(Semaphore::new(max_concurrency)));
        self.max_concurrency = Some(max_concurrency);
        self
    }

    pub fn concurrency_limit(&self) -> Option<usize> {
        self.max_concurrency
    }

    /// Simulates reading every book in `ids` concurrently and returns one status line
    /// per id, in completion order.
    pub async fn simulate_multiple(&self, ids: &[BookId], duration: Duration) -> Vec<String> {
        self.simulate_outcomes(ids, duration)
            .await
            .into_iter()
            .map(|outcome| outcome.to_string())
            .collect()
    }

    /// Same as `simulate_multiple`, keeping the structured outcomes.
    pub async fn simulate_outcomes(
        &self,
        ids: &[BookId],
        duration: Duration,
    ) -> Vec<ReadingOutcome> {
        if ids.is_empty() {
            return Vec::new();
        }

        let batch_id = Uuid::new_v4();
        let started = Instant::now();
        tracing::info!(
            "Batch {}: simulating {} readings ({:?} each)",
            batch_id,
            ids.len(),
            duration
        );

        let mut aggregator = ResultAggregator::new(ids.len());

        for &book_id in ids {
            let reporter = aggregator.reporter(book_id);
            let catalog = self.catalog.clone();
            let limiter = self.limiter.clone();

            tokio::spawn(async move {
                // Held until the outcome is reported.
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };

                let outcome = read_book(catalog.as_ref(), book_id, duration).await;
                reporter.report(outcome);
            });
        }

        let outcomes = aggregator.collect().await;

        tracing::info!(
            "Batch {}: {} of {} readings completed in {:?}",
            batch_id,
            outcomes.iter().filter(|o| o.is_completed()).count(),
            outcomes.len(),
            started.elapsed()
        );

        outcomes
    }
}

/// The work of a single task: look the book up, then read it.
async fn read_book(
    catalog: &dyn CatalogStore,
    book_id: BookId,
    duration: Duration,
) -> ReadingOutcome {
    match catalog.lookup(book_id).await {
        Ok(Some(book)) => {
            tokio::time::sleep(duration).await;
            tracing::debug!("Finished reading book {} ('{}')", book_id, book.title);
            ReadingOutcome::Completed {
                book_id,
                title: book.title,
            }
        }
        Ok(None) => {
            tracing::debug!("Book {} not found", book_id);
            ReadingOutcome::NotFound { book_id }
        }
        Err(e) => {
            tracing::warn!("Lookup for book {} failed: {}", book_id, e);
            ReadingOutcome::NotFound { book_id }
        }
    }
}

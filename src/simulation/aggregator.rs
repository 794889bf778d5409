//! Result Aggregator
//!
//! Single-use collection point for one simulation batch. It is sized to the number of
//! dispatched tasks, so a producer reporting its outcome never waits for the consumer.
//!
//! ## Guarantees
//! - **Completeness**: `collect` returns exactly as many outcomes as reporters were issued.
//! - **Arrival Order**: outcomes come back in the order producers reported them.
//! - **Dying Producers**: a `ResultReporter` dropped without reporting (e.g. its task
//!   panicked inside the catalog) reports its book as not found on the way out.

use super::types::ReadingOutcome;
use crate::catalog::types::BookId;

use tokio::sync::mpsc;

pub struct ResultAggregator {
    expected: usize,
    issued: usize,
    sender: mpsc::Sender<ReadingOutcome>,
    receiver: mpsc::Receiver<ReadingOutcome>,
}

impl ResultAggregator {
    /// Creates an aggregator that will wait for `expected` outcomes.
    pub fn new(expected: usize) -> Self {
        // tokio rejects zero-capacity channels; an empty batch never sends anyway.
        let (sender, receiver) = mpsc::channel(expected.max(1));
        Self {
            expected,
            issued: 0,
            sender,
            receiver,
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Hands out the reporting side for one task.
    ///
    /// # Panics
    /// If called more than `expected` times: the extra outcome would not fit the
    /// channel and `collect` would never see it.
    pub fn reporter(&mut self, book_id: BookId) -> ResultReporter {
        assert!(
            self.issued < self.expected,
            "issued more reporters than the aggregator was sized for"
        );
        self.issued += 1;

        ResultReporter {
            book_id,
            sender: Some(self.sender.clone()),
        }
    }

    /// Waits until every issued reporter has delivered, then returns the outcomes in
    /// arrival order. Consumes the aggregator.
    pub async fn collect(self) -> Vec<ReadingOutcome> {
        let Self {
            issued,
            sender,
            mut receiver,
            ..
        } = self;

        // Only reporters keep the channel open from here on.
        drop(sender);

        let mut outcomes = Vec::with_capacity(issued);
        while outcomes.len() < issued {
            match receiver.recv().await {
                Some(outcome) => outcomes.push(outcome),
                None => {
                    tracing::error!(
                        "Result channel closed after {} of {} outcomes",
                        outcomes.len(),
                        issued
                    );
                    break;
                }
            }
        }

        outcomes
    }
}

/// The producing half handed to one simulation task.
pub struct ResultReporter {
    book_id: BookId,
    sender: Option<mpsc::Sender<ReadingOutcome>>,
}

impl ResultReporter {
    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    /// Delivers the task's single outcome. Never blocks.
    pub fn report(mut self, outcome: ReadingOutcome) {
        if let Some(sender) = self.sender.take() {
            deliver(&sender, outcome);
        }
    }
}

impl Drop for ResultReporter {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            tracing::warn!(
                "Simulation task for book {} ended without reporting",
                self.book_id
            );
            deliver(
                &sender,
                ReadingOutcome::NotFound {
                    book_id: self.book_id,
                },
            );
        }
    }
}

fn deliver(sender: &mpsc::Sender<ReadingOutcome>, outcome: ReadingOutcome) {
    // Capacity equals the number of reporters, so this only fails if the
    // aggregator itself was dropped.
    if let Err(e) = sender.try_send(outcome) {
        tracing::debug!("Discarding simulation outcome: {}", e);
    }
}

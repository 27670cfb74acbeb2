use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::executor::OperationExecutor;
use super::types::{OperationDescriptor, OutcomeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSettings {
    pub parallel: bool,
    /// Upper bound on in-flight operations in parallel mode. Zero is treated as one.
    pub concurrency: usize,
    /// Bound on a single operation, retries included.
    pub operation_timeout: Duration,
}

impl DispatchSettings {
    const fn is_sequential(&self) -> bool {
        !self.parallel || self.concurrency <= 1
    }
}

/// Runs descriptors through a shared executor and collects one record each.
pub struct Dispatcher<E: ?Sized> {
    executor: Arc<E>,
    settings: DispatchSettings,
}

impl<E> Dispatcher<E>
where
    E: OperationExecutor + ?Sized + 'static,
{
    #[must_use]
    pub const fn new(executor: Arc<E>, settings: DispatchSettings) -> Self {
        Self { executor, settings }
    }

    /// Runs every descriptor exactly once.
    ///
    /// Sequential mode returns records in input order. Parallel mode returns
    /// one record per descriptor; callers correlate by target rather than
    /// position.
    pub async fn run(&self, descriptors: Vec<OperationDescriptor>) -> Vec<OutcomeRecord> {
        if descriptors.is_empty() {
            return Vec::new();
        }
        if self.settings.is_sequential() {
            self.run_sequential(descriptors).await
        } else {
            self.run_parallel(descriptors).await
        }
    }

    async fn run_sequential(&self, descriptors: Vec<OperationDescriptor>) -> Vec<OutcomeRecord> {
        let mut records = Vec::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            records.push(
                execute_timed(
                    self.executor.as_ref(),
                    descriptor,
                    self.settings.operation_timeout,
                )
                .await,
            );
        }
        records
    }

    async fn run_parallel(&self, descriptors: Vec<OperationDescriptor>) -> Vec<OutcomeRecord> {
        let total = descriptors.len();
        let workers = self.settings.concurrency.clamp(1, total);
        let queue: Arc<[OperationDescriptor]> = descriptors.into();
        let cursor = Arc::new(AtomicUsize::new(0));
        let (record_tx, mut record_rx) = mpsc::channel::<(usize, OutcomeRecord)>(workers);
        let operation_timeout = self.settings.operation_timeout;

        debug!("Dispatching {} operations across {} workers", total, workers);

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let executor = Arc::clone(&self.executor);
            let queue = Arc::clone(&queue);
            let cursor = Arc::clone(&cursor);
            let record_tx = record_tx.clone();

            handles.push(tokio::spawn(async move {
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(descriptor) = queue.get(index) else {
                        break;
                    };
                    let record =
                        execute_timed(executor.as_ref(), descriptor, operation_timeout).await;
                    if record_tx.send((index, record)).await.is_err() {
                        break;
                    }
                }
            }));
        }
        drop(record_tx);

        let mut slots: Vec<Option<OutcomeRecord>> = (0..total).map(|_| None).collect();
        while let Some((index, record)) = record_rx.recv().await {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(record);
            }
        }

        for handle in handles {
            if let Err(err) = handle.await {
                warn!("Dispatch worker failed: {}", err);
            }
        }

        slots
            .into_iter()
            .zip(queue.iter())
            .map(|(slot, descriptor)| {
                slot.unwrap_or_else(|| OutcomeRecord::aborted(descriptor))
            })
            .collect()
    }
}

async fn execute_timed<E>(
    executor: &E,
    descriptor: &OperationDescriptor,
    limit: Duration,
) -> OutcomeRecord
where
    E: OperationExecutor + ?Sized,
{
    let start = Instant::now();
    let result = tokio::time::timeout(limit, executor.execute(descriptor)).await;
    let record = match result {
        Ok(outcome) => OutcomeRecord::from_outcome(descriptor, start.elapsed(), outcome),
        Err(_elapsed) => OutcomeRecord::timed_out(descriptor, limit),
    };

    if let Some(failure) = record.failure.as_ref() {
        warn!(
            "Failed to {} zone {}. {}",
            descriptor.kind(),
            descriptor.target(),
            failure
        );
    }
    record
}

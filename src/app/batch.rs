use tokio::time::Instant;
use tracing::info;

use crate::dispatch::{Dispatcher, OperationExecutor, OperationKind};
use crate::metrics::{BatchMetrics, aggregate};
use crate::report;
use crate::workload::{self, ZoneTemplate};

/// Creates `count` freshly named zones and reports on the batch.
pub async fn run_create_batch<E>(
    dispatcher: &Dispatcher<E>,
    prefix: &str,
    count: usize,
    template: &ZoneTemplate,
) -> BatchMetrics
where
    E: OperationExecutor + ?Sized + 'static,
{
    println!("{}", report::creating_line(count, prefix));

    let start = Instant::now();
    let descriptors = {
        let mut rng = rand::thread_rng();
        workload::create_batch(prefix, count, template, &mut rng)
    };
    let records = dispatcher.run(descriptors).await;
    let metrics = aggregate(OperationKind::Create, &records, start.elapsed());
    info!(
        "Create batch finished: {} ok, {} failed",
        metrics.successful, metrics.failed
    );
    metrics
}

/// Deletes every zone whose name starts with `prefix`.
///
/// With no matching zones nothing is dispatched and an empty batch is
/// reported.
pub async fn run_delete_batch<E>(
    dispatcher: &Dispatcher<E>,
    executor: &E,
    prefix: &str,
) -> BatchMetrics
where
    E: OperationExecutor + ?Sized + 'static,
{
    let descriptors = workload::delete_batch(executor, prefix).await;
    if descriptors.is_empty() {
        println!("{}", report::no_matches_line(prefix));
        return BatchMetrics::empty(OperationKind::Delete);
    }
    println!("{}", report::deleting_line(descriptors.len(), prefix));

    let start = Instant::now();
    let records = dispatcher.run(descriptors).await;
    let metrics = aggregate(OperationKind::Delete, &records, start.elapsed());
    info!(
        "Delete batch finished: {} ok, {} failed",
        metrics.successful, metrics.failed
    );
    metrics
}

/// Prints and returns the zones matching `prefix`.
pub async fn run_list<E>(executor: &E, prefix: &str) -> Vec<String>
where
    E: OperationExecutor + ?Sized,
{
    let zones = workload::matching_zones(executor, prefix).await;
    report::print_lines(&report::listing_lines(prefix, &zones));
    zones
}

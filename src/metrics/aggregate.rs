use std::time::Duration;

use crate::dispatch::{OperationKind, OutcomeRecord};

use super::types::{BatchMetrics, LatencyStats};

/// Folds a batch's outcome records into its metrics.
///
/// Latency statistics cover every record, failed ones included: a slow
/// failure still costs the caller its duration.
#[must_use]
pub fn aggregate(
    kind: OperationKind,
    records: &[OutcomeRecord],
    batch_elapsed: Duration,
) -> BatchMetrics {
    let total = records.len();
    let successful = records.iter().filter(|record| record.is_success()).count();
    let mut durations: Vec<Duration> = records.iter().map(|record| record.duration).collect();

    BatchMetrics {
        kind,
        total,
        successful,
        failed: total.saturating_sub(successful),
        total_elapsed: batch_elapsed,
        latencies: LatencyStats::from_durations(&mut durations),
    }
}

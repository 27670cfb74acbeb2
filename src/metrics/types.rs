use std::time::Duration;

use crate::dispatch::OperationKind;

/// Basis points in 100%.
const FULL_RATE_X100: u128 = 10_000;

/// Latency distribution of one batch. All zero for an empty batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyStats {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub median: Duration,
}

impl LatencyStats {
    /// Computes the statistics, sorting `durations` in place.
    #[must_use]
    pub fn from_durations(durations: &mut [Duration]) -> Self {
        durations.sort_unstable();
        let (Some(&min), Some(&max)) = (durations.first(), durations.last()) else {
            return Self::default();
        };

        let sum = durations
            .iter()
            .try_fold(Duration::ZERO, |acc, value| acc.checked_add(*value))
            .unwrap_or(Duration::MAX);
        let count = u32::try_from(durations.len()).unwrap_or(u32::MAX);
        let mean = sum.checked_div(count).unwrap_or_default();

        Self {
            min,
            max,
            mean,
            median: median_of_sorted(durations),
        }
    }
}

fn median_of_sorted(sorted: &[Duration]) -> Duration {
    let mid = sorted.len().checked_div(2).unwrap_or(0);
    let upper = sorted.get(mid).copied().unwrap_or_default();
    if sorted.len() % 2 == 1 {
        return upper;
    }
    let lower = sorted
        .get(mid.saturating_sub(1))
        .copied()
        .unwrap_or_default();
    let half_gap = upper.saturating_sub(lower).checked_div(2).unwrap_or_default();
    lower.saturating_add(half_gap)
}

/// Summary of one create or delete batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchMetrics {
    pub kind: OperationKind,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub total_elapsed: Duration,
    pub latencies: LatencyStats,
}

impl BatchMetrics {
    /// A batch with no work, e.g. a delete with no matching zones.
    #[must_use]
    pub fn empty(kind: OperationKind) -> Self {
        Self {
            kind,
            total: 0,
            successful: 0,
            failed: 0,
            total_elapsed: Duration::ZERO,
            latencies: LatencyStats::default(),
        }
    }

    /// Batch wall clock divided by the operation count. Reflects throughput,
    /// so it drops below the mean latency in parallel mode.
    #[must_use]
    pub fn average_per_operation(&self) -> Duration {
        u32::try_from(self.total)
            .ok()
            .and_then(|total| self.total_elapsed.checked_div(total))
            .unwrap_or_default()
    }

    /// Success rate in hundredths of a percent. Exact ties round to even,
    /// so 1 of 32 reports 3.12%.
    #[must_use]
    pub fn success_rate_x100(&self) -> u64 {
        let total = self.total as u128;
        if total == 0 {
            return 0;
        }
        let scaled = (self.successful as u128).saturating_mul(FULL_RATE_X100);
        let quotient = scaled.checked_div(total).unwrap_or(0);
        let remainder = scaled.checked_rem(total).unwrap_or(0);
        let twice_remainder = remainder.saturating_mul(2);
        let rounds_up = twice_remainder > total
            || (twice_remainder == total && quotient.checked_rem(2) == Some(1));
        let rounded = if rounds_up {
            quotient.saturating_add(1)
        } else {
            quotient
        };
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }
}

//! Batch metrics: counts, wall-clock time, and latency statistics.
mod aggregate;
mod types;


pub use aggregate::aggregate;
pub use types::{BatchMetrics, LatencyStats};

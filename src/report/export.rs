use serde::Serialize;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::dispatch::OperationKind;
use crate::metrics::BatchMetrics;

/// Serialized form of one batch. Durations are in seconds.
#[derive(Debug, Clone, Serialize)]
pub struct BatchExport {
    pub operation: OperationKind,
    pub total_zones: usize,
    pub successful: usize,
    pub failed: usize,
    pub total_time_seconds: f64,
    pub average_time_per_zone: f64,
    pub success_rate_percent: String,
    pub response_times: Option<ResponseTimes>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponseTimes {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
}

impl From<&BatchMetrics> for BatchExport {
    fn from(metrics: &BatchMetrics) -> Self {
        let latencies = &metrics.latencies;
        let response_times = (metrics.total > 0).then(|| ResponseTimes {
            min: latencies.min.as_secs_f64(),
            max: latencies.max.as_secs_f64(),
            avg: latencies.mean.as_secs_f64(),
            median: latencies.median.as_secs_f64(),
        });
        Self {
            operation: metrics.kind,
            total_zones: metrics.total,
            successful: metrics.successful,
            failed: metrics.failed,
            total_time_seconds: metrics.total_elapsed.as_secs_f64(),
            average_time_per_zone: metrics.average_per_operation().as_secs_f64(),
            success_rate_percent: super::success_rate_percent(metrics.success_rate_x100()),
            response_times,
        }
    }
}

/// Writes every batch of the run to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub async fn export_json(path: &str, batches: &[BatchMetrics]) -> Result<(), std::io::Error> {
    let payload: Vec<BatchExport> = batches.iter().map(BatchExport::from).collect();
    let json = serde_json::to_vec_pretty(&payload).map_err(std::io::Error::other)?;

    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&json).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

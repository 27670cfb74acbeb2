use std::time::Duration;

use crate::metrics::BatchMetrics;

/// Hundredths of a percent per percent.
const PERCENT_DIVISOR: u64 = 100;

/// Run parameters echoed before any work starts.
#[derive(Debug, Clone, Copy)]
pub struct RunHeader<'run> {
    pub api_url: &'run str,
    pub server_id: &'run str,
    pub prefix: &'run str,
    pub parallel: bool,
    pub workers: usize,
}

#[must_use]
pub fn configuration_lines(header: &RunHeader<'_>) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "PowerDNS Load Test Configuration:".to_owned(),
        format!("  API URL: {}", header.api_url),
        format!("  Server ID: {}", header.server_id),
        format!("  Zone prefix: {}", header.prefix),
        format!(
            "  Parallel execution: {}",
            if header.parallel { "Yes" } else { "No" }
        ),
    ];
    if header.parallel {
        lines.push(format!("  Worker threads: {}", header.workers));
    }
    lines.push(String::new());
    lines
}

#[must_use]
pub fn creating_line(count: usize, prefix: &str) -> String {
    format!("Creating {} zones with prefix '{}'...", count, prefix)
}

#[must_use]
pub fn deleting_line(count: usize, prefix: &str) -> String {
    format!("Deleting {} zones with prefix '{}'...", count, prefix)
}

#[must_use]
pub fn no_matches_line(prefix: &str) -> String {
    format!("No zones found with prefix '{}'", prefix)
}

/// `Found N zones ...` followed by one indented name per zone.
#[must_use]
pub fn listing_lines(prefix: &str, zones: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(zones.len().saturating_add(1));
    lines.push(format!(
        "Found {} zones with prefix '{}':",
        zones.len(),
        prefix
    ));
    lines.extend(zones.iter().map(|zone| format!("  {}", zone)));
    lines
}

/// Metrics block for one batch. Timing detail is omitted for an empty batch.
#[must_use]
pub fn metrics_lines(metrics: &BatchMetrics) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("{} Operation Metrics:", metrics.kind.title()),
        format!("  Total zones: {}", metrics.total),
        format!("  Successful: {}", metrics.successful),
        format!("  Failed: {}", metrics.failed),
        format!(
            "  Total time: {} seconds",
            format_seconds(metrics.total_elapsed, 2)
        ),
    ];

    if metrics.total > 0 {
        let latencies = &metrics.latencies;
        lines.push(format!(
            "  Average time per zone: {} seconds",
            format_seconds(metrics.average_per_operation(), 4)
        ));
        lines.push("  API Response Times (seconds):".to_owned());
        lines.push(format!("    Min: {}", format_seconds(latencies.min, 4)));
        lines.push(format!("    Max: {}", format_seconds(latencies.max, 4)));
        lines.push(format!("    Avg: {}", format_seconds(latencies.mean, 4)));
        lines.push(format!(
            "    Median: {}",
            format_seconds(latencies.median, 4)
        ));
    }

    lines.push(format!(
        "  Success rate: {}%",
        success_rate_percent(metrics.success_rate_x100())
    ));
    lines
}

/// Seconds with a fixed number of decimals.
#[must_use]
pub fn format_seconds(duration: Duration, decimals: usize) -> String {
    format!("{:.*}", decimals, duration.as_secs_f64())
}

/// Renders basis points as a percentage with two decimals, e.g. `66.67`.
#[must_use]
pub fn success_rate_percent(rate_x100: u64) -> String {
    format!(
        "{}.{:02}",
        rate_x100.checked_div(PERCENT_DIVISOR).unwrap_or(0),
        rate_x100.checked_rem(PERCENT_DIVISOR).unwrap_or(0)
    )
}

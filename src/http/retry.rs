use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Statuses treated as transient.
const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];
/// Statuses whose `Retry-After` header overrides the computed backoff.
const RETRY_AFTER_STATUSES: [u16; 3] = [413, 429, 503];
const BACKOFF_MAX: Duration = Duration::from_secs(120);

/// Bounded retry with exponential backoff, applied per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    #[must_use]
    pub fn retries_status(&self, status: StatusCode) -> bool {
        RETRY_STATUSES.contains(&status.as_u16())
    }

    #[must_use]
    pub fn retries_error(&self, err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect() || err.is_request()
    }

    /// Sleep before retry number `retry` (1-based). The first retry is
    /// immediate; later ones double from `backoff`.
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        if retry <= 1 {
            return Duration::ZERO;
        }
        let factor = 2_u32.saturating_pow(retry.saturating_sub(1));
        self.backoff.saturating_mul(factor).min(BACKOFF_MAX)
    }

    /// Delay requested by the server through `Retry-After`, in whole seconds.
    #[must_use]
    pub fn retry_after(&self, status: StatusCode, headers: &HeaderMap) -> Option<Duration> {
        if !RETRY_AFTER_STATUSES.contains(&status.as_u16()) {
            return None;
        }
        headers
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }
}

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, AppResult, HttpError};

use super::{
    ExecutionOutcome, OperationDescriptor, OperationExecutor, OperationFailure, OperationKind,
    OperationRequest,
};

/// Executor double that records calls and tracks in-flight concurrency.
#[derive(Default)]
pub(crate) struct ScriptedExecutor {
    delay: Duration,
    slow: HashMap<String, Duration>,
    failing: HashSet<String>,
    zones: Vec<String>,
    list_status: Option<u16>,
    fail_call: Option<usize>,
    executed: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<(OperationKind, String)>>,
}

struct InFlightGuard<'guard>(&'guard AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ScriptedExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn with_slow_target(mut self, target: &str, delay: Duration) -> Self {
        self.slow.insert(target.to_owned(), delay);
        self
    }

    pub(crate) fn with_failing_target(mut self, target: &str) -> Self {
        self.failing.insert(target.to_owned());
        self
    }

    pub(crate) fn with_zones(mut self, zones: &[&str]) -> Self {
        self.zones = zones.iter().map(|zone| (*zone).to_owned()).collect();
        self
    }

    /// Fails the `nth` execute call (zero-based), whatever its target.
    pub(crate) const fn with_failing_call(mut self, nth: usize) -> Self {
        self.fail_call = Some(nth);
        self
    }

    pub(crate) const fn with_list_status(mut self, status: u16) -> Self {
        self.list_status = Some(status);
        self
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> Vec<(OperationKind, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub(crate) fn calls_of(&self, kind: OperationKind) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(call_kind, _)| *call_kind == kind)
            .map(|(_, target)| target)
            .collect()
    }

    fn record_call(&self, descriptor: &OperationDescriptor) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((descriptor.kind(), descriptor.target().to_owned()));
        }
    }
}

#[async_trait]
impl OperationExecutor for ScriptedExecutor {
    async fn execute(&self, descriptor: &OperationDescriptor) -> ExecutionOutcome {
        self.record_call(descriptor);
        let call_index = self.executed.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        let _guard = InFlightGuard(&self.in_flight);

        let delay = self
            .slow
            .get(descriptor.target())
            .copied()
            .unwrap_or(self.delay);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(descriptor.target()) || self.fail_call == Some(call_index) {
            return ExecutionOutcome::failed(OperationFailure::status(
                500,
                "Internal Server Error".to_owned(),
            ));
        }
        match descriptor.request() {
            OperationRequest::Create { .. } => ExecutionOutcome::success(201),
            OperationRequest::Delete => ExecutionOutcome::success(204),
        }
    }

    async fn list_targets(&self) -> AppResult<Vec<String>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((OperationKind::List, String::new()));
        }
        match self.list_status {
            Some(status) => Err(AppError::http(HttpError::ListStatus { status })),
            None => Ok(self.zones.clone()),
        }
    }
}

use std::sync::Arc;

use tracing::info;

use crate::dispatch::{Dispatcher, OperationExecutor};
use crate::error::AppResult;
use crate::http::{ClientSettings, ZoneApi, build_client};
use crate::metrics::BatchMetrics;
use crate::report::{self, RunHeader};

use super::batch::{run_create_batch, run_delete_batch, run_list};
use super::plan::RunPlan;

/// What a run produced, in execution order.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub batches: Vec<BatchMetrics>,
    /// Matching zones, for a list-only run.
    pub listed: Option<Vec<String>>,
}

/// Runs `plan` against the configured PowerDNS server.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, the API URL is
/// invalid, or the JSON export cannot be written. Failed zone operations are
/// reported in the metrics, not as errors.
pub async fn run(plan: RunPlan) -> AppResult<RunOutcome> {
    let client = build_client(&ClientSettings {
        api_key: plan.api_key.clone(),
        timeout: plan.request_timeout,
        verify_tls: plan.verify_tls,
    })?;
    let api = ZoneApi::new(client, &plan.api_url, &plan.server_id, plan.retry)?;

    let outcome = execute_plan(&plan, Arc::new(api)).await;

    if let Some(path) = plan.export_json.as_deref() {
        report::export_json(path, &outcome.batches).await?;
        info!("Exported metrics to {}", path);
    }
    Ok(outcome)
}

/// Prints the configuration, then runs the batches `plan.mode` selects.
pub async fn execute_plan<E>(plan: &RunPlan, executor: Arc<E>) -> RunOutcome
where
    E: OperationExecutor + ?Sized + 'static,
{
    report::print_lines(&report::configuration_lines(&RunHeader {
        api_url: &plan.api_url,
        server_id: &plan.server_id,
        prefix: &plan.prefix,
        parallel: plan.dispatch.parallel,
        workers: plan.dispatch.concurrency,
    }));

    if plan.mode.lists() {
        let zones = run_list(executor.as_ref(), &plan.prefix).await;
        return RunOutcome {
            batches: Vec::new(),
            listed: Some(zones),
        };
    }

    let dispatcher = Dispatcher::new(Arc::clone(&executor), plan.dispatch);
    let mut batches = Vec::with_capacity(2);

    if plan.mode.creates() {
        let metrics =
            run_create_batch(&dispatcher, &plan.prefix, plan.count, &plan.template).await;
        report::print_lines(&report::metrics_lines(&metrics));
        batches.push(metrics);
    }

    if plan.mode.deletes() {
        let metrics = run_delete_batch(&dispatcher, executor.as_ref(), &plan.prefix).await;
        report::print_lines(&report::metrics_lines(&metrics));
        batches.push(metrics);
    }

    RunOutcome {
        batches,
        listed: None,
    }
}

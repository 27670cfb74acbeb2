use std::time::Duration;

use crate::args::{LoadTestArgs, RunMode};
use crate::dispatch::DispatchSettings;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::RetryPolicy;
use crate::workload::ZoneTemplate;

/// Everything one invocation needs, validated and resolved from CLI, env,
/// and config file.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub mode: RunMode,
    pub api_url: String,
    pub api_key: String,
    pub server_id: String,
    pub prefix: String,
    pub count: usize,
    pub dispatch: DispatchSettings,
    pub request_timeout: Duration,
    pub verify_tls: bool,
    pub retry: RetryPolicy,
    pub template: ZoneTemplate,
    pub export_json: Option<String>,
}

impl RunPlan {
    /// # Errors
    ///
    /// Returns an error when the run mode flags conflict, or when the URL,
    /// API key, or prefix is missing.
    pub fn from_args(args: LoadTestArgs) -> AppResult<Self> {
        let mode = args.run_mode().map_err(AppError::validation)?;
        let request_timeout = args.request_timeout();
        let retry = RetryPolicy::new(args.retries, args.retry_backoff());

        let api_url = args
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        let api_key = args
            .key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::validation(ValidationError::MissingApiKey))?;
        // An empty prefix would select every zone on the server for deletion.
        if args.prefix.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyPrefix));
        }

        Ok(Self {
            mode,
            api_url,
            api_key,
            server_id: args.server_id,
            prefix: args.prefix,
            count: args.count,
            dispatch: DispatchSettings {
                parallel: args.parallel,
                concurrency: args.workers.get(),
                operation_timeout: request_timeout,
            },
            request_timeout,
            verify_tls: !args.no_verify_ssl,
            retry,
            template: ZoneTemplate {
                kind: args.zone_kind,
                nameservers: args.nameservers,
            },
            export_json: args.export_json,
        })
    }
}

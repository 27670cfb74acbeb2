use clap::Parser;
use std::time::Duration;

use crate::error::ValidationError;

use super::defaults::{DEFAULT_NAMESERVERS, DEFAULT_PREFIX, DEFAULT_SERVER_ID, DEFAULT_ZONE_KIND};
use super::parsers::{parse_bool_env, parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize, RunMode};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "PowerDNS Authoritative API load test tool - creates and deletes zones and reports API latency."
)]
pub struct LoadTestArgs {
    /// PowerDNS API URL (e.g., http://localhost:8081)
    #[arg(long, short, env = "PDNS_API_URL")]
    pub url: Option<String>,

    /// PowerDNS API key
    #[arg(long, short, env = "PDNS_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// PowerDNS server ID
    #[arg(long = "server-id", default_value = DEFAULT_SERVER_ID)]
    pub server_id: String,

    /// Prefix for zone names
    #[arg(long, short, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Number of zones to create
    #[arg(long, short, default_value = "10")]
    pub count: usize,

    /// API request timeout in seconds
    #[arg(long, default_value = "30", value_parser = parse_positive_u64)]
    pub timeout: PositiveU64,

    /// Disable SSL certificate verification
    #[arg(long = "no-verify-ssl")]
    pub no_verify_ssl: bool,

    /// Perform operations in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of concurrent workers for parallel operations
    #[arg(long, short, default_value = "10", value_parser = parse_positive_usize)]
    pub workers: PositiveUsize,

    /// Only create zones, don't delete
    #[arg(long = "create-only")]
    pub create_only: bool,

    /// Only delete zones with prefix, don't create
    #[arg(long = "delete-only")]
    pub delete_only: bool,

    /// Only list zones with prefix, don't create or delete
    #[arg(long = "list-only")]
    pub list_only: bool,

    /// Retries per request on 429/5xx responses and transport errors
    #[arg(long, default_value = "3")]
    pub retries: u32,

    /// Base backoff between retries in milliseconds (doubles per retry)
    #[arg(long = "retry-backoff-ms", default_value = "500")]
    pub retry_backoff_ms: u64,

    /// Zone kind for created zones
    #[arg(long = "zone-kind", default_value = DEFAULT_ZONE_KIND)]
    pub zone_kind: String,

    /// Nameserver for created zones (repeatable)
    #[arg(long = "nameserver", default_values = DEFAULT_NAMESERVERS)]
    pub nameservers: Vec<String>,

    /// Write batch metrics to a JSON file
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Path to config file (TOML/JSON). Defaults to ./pdns-loadtest.toml or ./pdns-loadtest.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by PDNS_LOADTEST_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

impl LoadTestArgs {
    /// Resolves the mode flags into a single run mode.
    ///
    /// # Errors
    ///
    /// Returns an error when both `--create-only` and `--delete-only` are set.
    pub const fn run_mode(&self) -> Result<RunMode, ValidationError> {
        if self.create_only && self.delete_only {
            return Err(ValidationError::CreateDeleteConflict);
        }
        if self.list_only {
            return Ok(RunMode::ListOnly);
        }
        if self.create_only {
            return Ok(RunMode::CreateOnly);
        }
        if self.delete_only {
            return Ok(RunMode::DeleteOnly);
        }
        Ok(RunMode::CreateThenDelete)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.get())
    }

    #[must_use]
    pub const fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

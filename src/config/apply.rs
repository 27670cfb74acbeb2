use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{LoadTestArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values are only taken from the config where the matching flag was not
/// given on the command line. Environment variables count as not given.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut LoadTestArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_explicit(matches, "key")
        && let Some(key) = config.key.clone()
    {
        args.key = Some(key);
    }

    if !is_cli(matches, "server_id")
        && let Some(server_id) = config.server_id.clone()
    {
        args.server_id = server_id;
    }

    if !is_cli(matches, "prefix")
        && let Some(prefix) = config.prefix.clone()
    {
        args.prefix = prefix;
    }

    if !is_cli(matches, "count")
        && let Some(count) = config.count
    {
        args.count = count;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout
    {
        args.timeout = ensure_positive_u64(timeout, "timeout")?;
    }

    if !is_cli(matches, "no_verify_ssl")
        && let Some(verify) = config.verify_ssl
    {
        args.no_verify_ssl = !verify;
    }

    if !is_cli(matches, "parallel")
        && let Some(parallel) = config.parallel
    {
        args.parallel = parallel;
    }

    if !is_cli(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = ensure_positive_usize(workers, "workers")?;
    }

    if !is_cli(matches, "retries")
        && let Some(retries) = config.retries
    {
        args.retries = retries;
    }

    if !is_cli(matches, "retry_backoff_ms")
        && let Some(backoff) = config.retry_backoff_ms
    {
        args.retry_backoff_ms = backoff;
    }

    if !is_cli(matches, "zone_kind")
        && let Some(kind) = config.zone_kind.clone()
    {
        args.zone_kind = kind;
    }

    if !is_cli(matches, "nameservers")
        && let Some(nameservers) = config.nameservers.clone()
    {
        args.nameservers = nameservers;
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

// url/key also accept env vars, which beat the config file.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

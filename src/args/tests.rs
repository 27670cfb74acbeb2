use super::*;
use crate::error::ValidationError;
use clap::Parser;
use std::time::Duration;

fn parse_test_args<I, T>(args: I) -> Result<LoadTestArgs, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    LoadTestArgs::try_parse_from(args).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn parse_args_defaults() -> Result<(), String> {
    let args = parse_test_args(["pdns-loadtest", "--url", "http://localhost:8081", "--key", "s3cr3t"])?;

    let checks = [
        (
            args.url.as_deref() == Some("http://localhost:8081"),
            "Unexpected url",
        ),
        (args.key.as_deref() == Some("s3cr3t"), "Unexpected key"),
        (args.server_id == "localhost", "Unexpected server_id"),
        (args.prefix == "loadtest-", "Unexpected prefix"),
        (args.count == 10, "Unexpected count"),
        (
            args.request_timeout() == Duration::from_secs(30),
            "Unexpected timeout",
        ),
        (!args.no_verify_ssl, "Expected no_verify_ssl to be false"),
        (!args.parallel, "Expected parallel to be false"),
        (args.workers.get() == 10, "Unexpected workers"),
        (args.retries == 3, "Unexpected retries"),
        (
            args.retry_backoff() == Duration::from_millis(500),
            "Unexpected retry backoff",
        ),
        (args.zone_kind == "Native", "Unexpected zone kind"),
        (
            args.nameservers == ["ns1.example.com.", "ns2.example.com."],
            "Unexpected nameservers",
        ),
        (args.export_json.is_none(), "Expected export_json to be None"),
        (args.config.is_none(), "Expected config to be None"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }

    match args.run_mode() {
        Ok(RunMode::CreateThenDelete) => Ok(()),
        Ok(other) => Err(format!("Unexpected run mode: {:?}", other)),
        Err(err) => Err(format!("Unexpected error: {}", err)),
    }
}

#[test]
fn parse_args_parallel_options() -> Result<(), String> {
    let args = parse_test_args([
        "pdns-loadtest",
        "--url",
        "http://localhost:8081",
        "--key",
        "k",
        "--parallel",
        "--workers",
        "25",
        "--count",
        "200",
        "--timeout",
        "5",
        "--no-verify-ssl",
        "--nameserver",
        "ns.test.",
    ])?;

    if !args.parallel || args.workers.get() != 25 || args.count != 200 {
        return Err("Parallel options were not parsed".to_owned());
    }
    if args.request_timeout() != Duration::from_secs(5) {
        return Err("Unexpected timeout".to_owned());
    }
    if !args.no_verify_ssl {
        return Err("Expected no_verify_ssl".to_owned());
    }
    if args.nameservers != ["ns.test."] {
        return Err(format!("Unexpected nameservers: {:?}", args.nameservers));
    }
    Ok(())
}

#[test]
fn zero_workers_is_rejected() -> Result<(), String> {
    let result = parse_test_args(["pdns-loadtest", "--workers", "0"]);
    if result.is_ok() {
        return Err("Expected --workers 0 to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn zero_count_is_accepted() -> Result<(), String> {
    let args = parse_test_args(["pdns-loadtest", "--count", "0"])?;
    if args.count != 0 {
        return Err(format!("Unexpected count: {}", args.count));
    }
    Ok(())
}

#[test]
fn create_only_and_delete_only_conflict() -> Result<(), String> {
    let args = parse_test_args(["pdns-loadtest", "--create-only", "--delete-only"])?;
    match args.run_mode() {
        Err(ValidationError::CreateDeleteConflict) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(mode) => Err(format!("Expected conflict, got {:?}", mode)),
    }
}

#[test]
fn conflict_wins_over_list_only() -> Result<(), String> {
    let args = parse_test_args([
        "pdns-loadtest",
        "--list-only",
        "--create-only",
        "--delete-only",
    ])?;
    if args.run_mode().is_ok() {
        return Err("Expected conflict error".to_owned());
    }
    Ok(())
}

#[test]
fn run_mode_flags_resolve() -> Result<(), String> {
    let cases = [
        ("--create-only", RunMode::CreateOnly, true, false),
        ("--delete-only", RunMode::DeleteOnly, false, true),
        ("--list-only", RunMode::ListOnly, false, false),
    ];
    for (flag, expected, creates, deletes) in cases {
        let args = parse_test_args(["pdns-loadtest", flag])?;
        let mode = args.run_mode().map_err(|err| err.to_string())?;
        if mode != expected {
            return Err(format!("{}: expected {:?}, got {:?}", flag, expected, mode));
        }
        if mode.creates() != creates || mode.deletes() != deletes {
            return Err(format!("{}: unexpected create/delete selection", flag));
        }
    }
    Ok(())
}

#[test]
fn parse_bool_env_accepts_common_spellings() -> Result<(), String> {
    for value in ["1", "true", "YES", "on"] {
        if !parsers::parse_bool_env(value).map_err(|err| err.to_string())? {
            return Err(format!("Expected '{}' to be true", value));
        }
    }
    for value in ["0", "false", "no", "Off"] {
        if parsers::parse_bool_env(value).map_err(|err| err.to_string())? {
            return Err(format!("Expected '{}' to be false", value));
        }
    }
    if parsers::parse_bool_env("maybe").is_ok() {
        return Err("Expected 'maybe' to be rejected".to_owned());
    }
    Ok(())
}

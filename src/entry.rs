use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::app::{self, RunPlan};
use crate::args::LoadTestArgs;
use crate::error::{AppError, AppResult};

/// Parses the command line, resolves configuration, and runs the load test.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration, or when the run
/// cannot start. Failed zone operations are reported, not returned.
pub fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;

    // Flag conflicts fail before logging, config, or any network activity.
    args.run_mode().map_err(AppError::validation)?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let args = apply_config(args, &matches)?;
    let plan = RunPlan::from_args(args)?;
    debug!("Resolved run plan: {:?}", plan.mode);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run(plan))?;
    Ok(())
}

fn parse_args() -> AppResult<(LoadTestArgs, ArgMatches)> {
    let matches = LoadTestArgs::command().get_matches();
    let args = LoadTestArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(mut args: LoadTestArgs, matches: &ArgMatches) -> AppResult<LoadTestArgs> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, matches, &config)?;
    }
    Ok(args)
}

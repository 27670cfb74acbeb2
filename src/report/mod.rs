//! Human-readable output and JSON export of a run.
//!
//! Every renderer returns its lines so callers decide where they go; the
//! binary prints them to stdout while logs stay on stderr.
mod export;
mod lines;


pub use export::{BatchExport, ResponseTimes, export_json};
pub use lines::{
    RunHeader, configuration_lines, creating_line, deleting_line, format_seconds, listing_lines,
    metrics_lines, no_matches_line, success_rate_percent,
};

/// Writes `lines` to stdout, one per line.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

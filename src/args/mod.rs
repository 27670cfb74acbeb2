//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::LoadTestArgs;
pub use types::{PositiveU64, PositiveUsize, RunMode};

pub(crate) use defaults::{DEFAULT_NAMESERVERS, DEFAULT_USER_AGENT, DEFAULT_ZONE_KIND};

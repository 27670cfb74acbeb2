//! PowerDNS API access: client construction, retries, and the zone executor.
mod client;
mod retry;
mod zones;

#[cfg(test)]
mod test_server;

pub use client::{ClientSettings, build_client};
pub use retry::RetryPolicy;
pub use zones::{ZoneApi, ZoneSummary};

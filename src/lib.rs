//! Load test harness for the PowerDNS Authoritative HTTP API.
//!
//! A run creates a batch of randomly named zones, deletes every zone sharing
//! the configured prefix, or lists those zones. Each batch is dispatched
//! sequentially or across a bounded worker pool, and its latency and success
//! statistics are printed once it finishes. The `pdns-loadtest` binary is the
//! primary interface; library APIs exist mainly for tests and may change.
pub mod app;
pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;
pub mod workload;

mod entry;
mod logger;

pub use entry::run;

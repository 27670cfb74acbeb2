pub(crate) const DEFAULT_USER_AGENT: &str = concat!("pdns-loadtest/", env!("CARGO_PKG_VERSION"));

/// Nameservers attached to every generated zone unless overridden.
pub(crate) const DEFAULT_NAMESERVERS: [&str; 2] = ["ns1.example.com.", "ns2.example.com."];

pub(super) const DEFAULT_SERVER_ID: &str = "localhost";
pub(super) const DEFAULT_PREFIX: &str = "loadtest-";
pub(crate) const DEFAULT_ZONE_KIND: &str = "Native";

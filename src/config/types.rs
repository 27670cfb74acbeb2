use serde::Deserialize;

/// On-disk configuration. Every field is optional; flags given on the
/// command line take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub key: Option<String>,
    pub server_id: Option<String>,
    pub prefix: Option<String>,
    pub count: Option<usize>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
    pub verify_ssl: Option<bool>,
    pub parallel: Option<bool>,
    pub workers: Option<usize>,
    pub retries: Option<u32>,
    pub retry_backoff_ms: Option<u64>,
    pub zone_kind: Option<String>,
    pub nameservers: Option<Vec<String>>,
    pub export_json: Option<String>,
}

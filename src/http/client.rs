use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

const API_KEY_HEADER: &str = "X-API-Key";
const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_key: String,
    pub timeout: Duration,
    pub verify_tls: bool,
}

/// Builds the process-wide HTTP client.
///
/// `reqwest::Client` keeps its connection pool behind an `Arc` and is safe to
/// share between tasks; every worker of a batch uses clones of this client.
///
/// # Errors
///
/// Returns an error when the API key is not a valid header value or the
/// client cannot be built.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut api_key = HeaderValue::from_str(&settings.api_key).map_err(|err| {
        AppError::http(HttpError::InvalidHeaderValue {
            name: API_KEY_HEADER,
            source: err,
        })
    })?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("x-api-key"), api_key);
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));

    let mut builder = Client::builder()
        .timeout(settings.timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .default_headers(headers);

    if !settings.verify_tls {
        tracing::warn!("TLS certificate verification is disabled.");
        builder = builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}

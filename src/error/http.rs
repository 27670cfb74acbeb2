use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to join endpoint '{endpoint}' onto '{base}': {source}")]
    JoinUrlFailed {
        base: String,
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Listing zones failed with status {status}.")]
    ListStatus { status: u16 },
    #[error("Listing zones failed: {message}")]
    ListTransport { message: String },
    #[error("Failed to decode zone listing: {source}")]
    ListDecode {
        #[source]
        source: reqwest::Error,
    },
}

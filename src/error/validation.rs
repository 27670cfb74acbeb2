use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Cannot specify both --create-only and --delete-only")]
    CreateDeleteConflict,
    #[error("Missing API URL (set --url, PDNS_API_URL, or provide it in config).")]
    MissingUrl,
    #[error("Missing API key (set --key, PDNS_API_KEY, or provide it in config).")]
    MissingApiKey,
    #[error("Zone prefix must not be empty.")]
    EmptyPrefix,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
}

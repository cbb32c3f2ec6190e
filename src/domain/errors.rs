use reqwest::StatusCode;
use thiserror::Error;

/// Why a request against the novels API produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    #[error("failed to configure HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short name of the failure kind, for status lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) | FetchError::Client(_) => "configuration",
            FetchError::Network(_) => "network",
            FetchError::Status { .. } => "http status",
            FetchError::Decode(_) => "decode",
        }
    }

    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

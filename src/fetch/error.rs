use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching a resource.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Endpoint and parameter do not form a usable URL
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request could not be sent or the response not received
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Server answered with a non-success status
    #[error("Server responded with HTTP {status}{}", reason_suffix(.status))]
    HttpStatus { status: u16 },

    /// Body is not valid JSON or lacks required fields
    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short classification used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Network(_) => "network",
            FetchError::Timeout { .. } => "timeout",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode(_) => "decode",
        }
    }
}

fn reason_suffix(status: &u16) -> String {
    StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|reason| format!(" ({})", reason))
        .unwrap_or_default()
}

use thiserror::Error;

/// Custom error type for the HTTP boundary, allow us to differentiate
/// between errors.
///
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Bad HTTP status: {0}")]
    Status(reqwest::StatusCode),
    #[error("Can not decode response: {0}")]
    Decoding(#[from] serde_json::Error),
}

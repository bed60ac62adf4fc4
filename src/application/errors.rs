// Error types for fetching and rendering region payloads
use thiserror::Error;

/// Every variant is retried the same way by `RetryingFetcher`
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("{0}")]
    Api(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
}

use serde_json::Value;

/// Sequence number the caller attaches to a search so it can match the completion.
pub type SearchGeneration = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        generation: SearchGeneration,
        result: Result<Vec<Value>, SearchError>,
    },
}

/// Failure of a fetch + process round trip.
///
/// The `Display` text is what the user sees in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to fetch news")]
    Fetch { status: u16 },
    #[error("Failed to process news")]
    Process { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("response too large (max {max_bytes} bytes)")]
    TooLarge { max_bytes: u64 },
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    #[error("An unexpected error occurred")]
    Unexpected,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(String),
}

//! Error handling

use thiserror::Error;

/// Error
#[derive(Error, Debug)]
pub enum BatchError {
    /// Malformed descriptor or empty-queue submission
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Queue would exceed the remote API's batch ceiling
    #[error("Batch limit of {0} requests exceeded")]
    BatchLimitExceeded(usize),

    /// Serialization failure while building the wire payload
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the batch endpoint
    #[error("API error: {0}")]
    Api(String),

    /// Response is not array-shaped or its length does not match the queue
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Batch result type
pub type Result<T> = std::result::Result<T, BatchError>;

impl BatchError {
    /// Whether retrying the same submission may succeed
    ///
    /// The queue is retained on every submit-time failure, so a retryable
    /// error can be resubmitted as-is by the caller. No retry is performed
    /// internally.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BatchError::Network(_) | BatchError::Api(_))
    }

    /// Whether the error was raised before any network call
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BatchError::InvalidRequest(_)
                | BatchError::BatchLimitExceeded(_)
                | BatchError::Encoding(_)
                | BatchError::Config(_)
        )
    }
}

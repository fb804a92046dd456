use thiserror::Error;

/// Failure of a call to the Majelis API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to encode query: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

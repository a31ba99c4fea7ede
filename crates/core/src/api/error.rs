use thiserror::Error;

/// Errors surfaced by [`ApiClient`](super::ApiClient) implementations.
///
/// Variants carry plain strings rather than transport-library types so this
/// crate stays free of HTTP dependencies. Repositories propagate these
/// unchanged; the only translation they perform is mapping `NotFound` to an
/// absent result on reads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Resource not found: {url}")]
    NotFound { url: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for API and repository operations.
pub type Result<T> = std::result::Result<T, ApiError>;

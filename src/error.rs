//! Error types shared by the search pipeline

use thiserror::Error;

/// Failure of a search or listing call
#[derive(Debug, Error)]
pub enum SearchError {
    /// Caller-supplied input was missing or blank
    #[error("{0}")]
    InvalidArgument(String),
    /// The GitHub API call failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    /// Reading or writing the local store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure while talking to the GitHub search API
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status
    #[error("GitHub API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// The request never produced a response (connect error, timeout)
    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body could not be decoded into a search envelope
    #[error("failed to decode GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured base URL cannot be joined with the request path
    #[error("invalid GitHub API URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Failure of the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

//! Error types for the artwork cache

/// Result type alias for artwork cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the artwork cache
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Download returned a non-success status
    #[error("Download returned status {status} for {url}")]
    DownloadFailed {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Download body was empty
    #[error("Empty artwork body from {0}")]
    EmptyBody(String),

    /// Configuration error (from smxconfig/anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

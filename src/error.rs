//! Common error type and result alias for the crate.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    /// The upstream image service answered with a non-success status.
    /// The status is kept so the proxy can relay it; the body is only
    /// ever logged server-side.
    #[error("upstream service error (status {status})")]
    Upstream { status: u16, body: String },

    #[error("unknown logo style: {0}")]
    UnknownStyle(String),

    #[error("{0}")]
    Validation(String),

    #[error("generation failed: {0}")]
    Generation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

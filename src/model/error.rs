use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Failure classes a scan can surface. `Validation` is reported before any
/// request goes out; everything else propagates to the top-level invocation.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0} must not be empty")]
    Validation(&'static str),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("could not write report: {0}")]
    Report(#[from] std::io::Error),
}

//! Error types for maptiler-geocoder

use thiserror::Error;

/// Main error type for geocoder operations
#[derive(Error, Debug)]
pub enum Error {
    /// Fatal configuration problem, raised synchronously at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid language, bounds, or proximity input; the field keeps its
    /// previous value when a setter returns this
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for geocoder operations
pub type Result<T> = std::result::Result<T, Error>;

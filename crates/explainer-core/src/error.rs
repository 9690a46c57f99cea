//! Error types for the letter explainer

use thiserror::Error;

/// Main error type for all explainer operations
#[derive(Error, Debug)]
pub enum ExplainerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document fetch failed: {0}")]
    Fetch(String),

    #[error("PDF parsing failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Result type for explainer operations
pub type Result<T> = std::result::Result<T, ExplainerError>;

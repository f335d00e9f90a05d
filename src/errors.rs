//! Error types for guestdesk
//!
//! Provides error handling with context propagation across the
//! ingestion, retrieval, and LLM layers.

use thiserror::Error;

/// Main error type for the guestdesk system
#[derive(Error, Debug)]
pub enum GuestDeskError {
    /// Document extraction errors (PDF/text)
    #[error("Extraction failed for {file}: {reason}")]
    Extraction { file: String, reason: String },

    /// LLM API errors
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// LLM backend is not configured (missing key, unreachable host)
    #[error("LLM backend unavailable: {0}")]
    LlmUnavailable(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for guestdesk operations
pub type Result<T> = std::result::Result<T, GuestDeskError>;

/// Convert anyhow errors to GuestDeskError
impl From<anyhow::Error> for GuestDeskError {
    fn from(err: anyhow::Error) -> Self {
        GuestDeskError::Generic(err.to_string())
    }
}

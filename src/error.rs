//! Error types for scrape operations.

use thiserror::Error;

/// Result type alias for fallible scrape operations.
pub type SiftResult<T> = Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Every retrieval candidate was exhausted, or the privileged API call
    /// failed. Carries the last observed failure message.
    #[error("network error: {0}")]
    Network(String),

    /// The target URL could not be parsed.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Rendering the model to an export format failed. Never escapes
    /// `serialize`, which turns it into a diagnostic string.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

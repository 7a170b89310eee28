use thiserror::Error;

/// Unified error type for catalog lookups and report I/O
#[derive(Debug, Error)]
pub enum DeckError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON (response body or cache file)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Scryfall answered with an error object, usually "not_found"
    #[error("Card '{name}' not found: {details}")]
    NotFound { name: String, details: String },
    /// HTTP error status without a readable error body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

/// Result type alias for deck operations
pub type DeckResult<T> = Result<T, DeckError>;

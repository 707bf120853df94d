//! Error types for namescout.

/// Top-level error type for enumeration, configuration and search setup.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// Configuration file could not be parsed, serialized or validated.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search setup error (invalid search settings, extractor construction).
    #[error("search error: {0}")]
    Search(#[from] namescout_search::SearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ScoutError>;

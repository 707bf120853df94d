//! Error types for the namescout-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Search queries never appear in error messages.

/// Errors that can occur during search operations.
///
/// None of these abort a unified search: the orchestrator converts every
/// variant into "fewer results" at the engine, site or branch level.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport failure talking to a search engine.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A request exceeded its per-request timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Failed to parse a search engine response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The entity extraction collaborator failed.
    #[error("entity extraction error: {0}")]
    Extraction(String),

    /// A search branch did not complete (task panic or cancellation).
    #[error("branch error: {0}")]
    Branch(String),
}

/// Convenience type alias for namescout-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let err = SearchError::Timeout("exceeded 10s limit".into());
        assert_eq!(err.to_string(), "request timed out: exceeded 10s limit");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("unexpected HTML structure".into());
        assert_eq!(err.to_string(), "parse error: unexpected HTML structure");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be > 0".into());
        assert_eq!(err.to_string(), "config error: timeout_seconds must be > 0");
    }

    #[test]
    fn display_extraction_and_branch() {
        let err = SearchError::Extraction("bad input".into());
        assert_eq!(err.to_string(), "entity extraction error: bad input");
        let err = SearchError::Branch("socials panicked".into());
        assert_eq!(err.to_string(), "branch error: socials panicked");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}

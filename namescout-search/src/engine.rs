//! Trait definition for pluggable result extraction.
//!
//! The orchestrator hands each fetched page body to a [`ResultExtractor`]
//! together with the name of the engine that produced it, and gets back
//! normalised [`SearchResult`] values.

use crate::error::SearchError;
use crate::types::SearchResult;

/// Turns a raw search results page into structured results.
///
/// Implementors own all engine-specific markup knowledge. Engine names they
/// do not recognise should fall back to a generic rule rather than fail.
///
/// All implementations must be `Send + Sync` for concurrent branches.
pub trait ResultExtractor: Send + Sync + 'static {
    /// Extract results from `body`, tagging each with `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] if the page cannot be processed. The
    /// orchestrator logs the error and counts zero results for that engine.
    fn extract(&self, body: &str, engine: &str) -> Result<Vec<SearchResult>, SearchError>;
}

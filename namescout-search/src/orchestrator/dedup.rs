//! Result deduplication by link, and the aggregated text buffer.
//!
//! Results from all branches are concatenated in dispatch order before
//! deduplication, so the first occurrence of a link wins and keeps its
//! position; later duplicates are dropped whatever engine returned them.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Drop results whose [`identity`](SearchResult::identity) was already seen,
/// preserving first-seen order.
pub fn deduplicate(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|result| seen.insert(result.identity().to_owned()))
        .collect()
}

/// Build the text handed to entity extraction: `name`, then each result's
/// title, snippet and link, one per line.
pub fn build_text_buffer(name: &str, results: &[SearchResult]) -> String {
    let mut buffer = String::from(name);
    for result in results {
        for part in [&result.title, &result.snippet, &result.link] {
            buffer.push('\n');
            buffer.push_str(part);
        }
    }
    buffer
}

//! Fallback extraction: any outbound anchor with non-trivial text.

use std::collections::HashSet;

use scraper::Html;

use super::{element_text, is_outbound, selector};
use crate::error::SearchError;
use crate::types::SearchResult;

/// Anchors with fewer visible characters than this are treated as chrome.
const MIN_ANCHOR_TEXT_CHARS: usize = 3;

/// Extract every outbound `http(s)` anchor whose text has at least
/// [`MIN_ANCHOR_TEXT_CHARS`] characters. Snippets are left empty; repeated
/// links keep their first occurrence.
pub fn parse_generic_html(html: &str, engine: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);
    let anchor_sel = selector("a[href]")?;

    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if !is_outbound(href) {
            continue;
        }
        let text = element_text(anchor);
        if text.chars().count() < MIN_ANCHOR_TEXT_CHARS {
            continue;
        }
        if !seen.insert(href.to_string()) {
            continue;
        }
        results.push(SearchResult::new(engine, text, href, ""));
    }

    tracing::debug!(engine, count = results.len(), "generic anchors parsed");
    Ok(results)
}

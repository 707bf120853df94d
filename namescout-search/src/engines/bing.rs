//! Bing results page parser.
//!
//! Bing sometimes wraps result links in `bing.com/ck/a` click trackers whose
//! `u` parameter carries the real URL as `a1` + URL-safe base64.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use scraper::Html;
use url::Url;

use super::{element_text, is_outbound, selector};
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

/// Parse a Bing HTML response into search results.
pub fn parse_bing_html(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    // Bing uses li.b_algo containers for organic search results
    let result_sel = selector("li.b_algo")?;
    let title_sel = selector("h2")?;
    let link_sel = selector("a[href]")?;
    let snippet_sel = selector(".b_caption p, .b_lineclamp2, .b_lineclamp3")?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = element_text(title_el);
        if title.is_empty() {
            continue;
        }

        let Some(link) = title_el
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(unwrap_click_tracker)
        else {
            continue;
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult::new(
            SearchEngine::Bing.name(),
            title,
            link,
            snippet,
        ));
    }

    tracing::debug!(count = results.len(), "bing results parsed");
    Ok(results)
}

/// Resolve a Bing result href to the destination URL.
fn unwrap_click_tracker(href: &str) -> Option<String> {
    if !is_outbound(href) {
        return None;
    }
    let parsed = Url::parse(href).ok()?;
    let is_tracker = parsed
        .host_str()
        .is_some_and(|h| h.ends_with("bing.com"))
        && parsed.path().starts_with("/ck/");
    if !is_tracker {
        return Some(href.to_string());
    }
    let encoded = parsed
        .query_pairs()
        .find(|(key, _)| key == "u")
        .map(|(_, value)| value.into_owned())?;
    let payload = encoded.strip_prefix("a1")?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let target = String::from_utf8(decoded).ok()?;
    is_outbound(&target).then_some(target)
}

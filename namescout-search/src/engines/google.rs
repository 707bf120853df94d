//! Google results page parser.
//!
//! Handles both the JavaScript page (`div.g` blocks with direct links) and
//! the basic HTML page Google serves to non-browser clients, where result
//! links are wrapped as `/url?q=<target>&sa=...`.

use scraper::Html;
use url::Url;

use super::{element_text, is_outbound, selector};
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

/// Parse a Google HTML response into search results.
pub fn parse_google_html(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = selector("div.g, div.Gx5Zad")?;
    let title_sel = selector("h3")?;
    let link_sel = selector("a[href]")?;
    let snippet_sel = selector(".VwiC3b, .IsZvec, .BNeawe.s3v9rd, [data-sncf]")?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };
        let title = element_text(title_el);
        if title.is_empty() {
            continue;
        }

        let Some(link) = element
            .select(&link_sel)
            .filter_map(|a| a.value().attr("href"))
            .find_map(extract_url)
        else {
            continue;
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult::new(
            SearchEngine::Google.name(),
            title,
            link,
            snippet,
        ));
    }

    tracing::debug!(count = results.len(), "google results parsed");
    Ok(results)
}

/// Resolve a Google result href to the destination URL.
///
/// `/url?q=https%3A%2F%2Fexample.com&sa=U` yields `https://example.com`;
/// direct absolute links pass through; anything else is rejected.
fn extract_url(href: &str) -> Option<String> {
    if href.starts_with("/url?") {
        let parsed = Url::parse(&format!("https://www.google.com{href}")).ok()?;
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "q" || key == "url")
            .map(|(_, value)| value.into_owned())
            .filter(|target| is_outbound(target));
    }
    is_outbound(href).then(|| href.to_string())
}

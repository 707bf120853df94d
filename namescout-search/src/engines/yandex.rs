//! Yandex results page parser.

use scraper::Html;

use super::{element_text, is_outbound, selector};
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

/// Parse a Yandex HTML response into search results.
///
/// Organic results are `li.serp-item` blocks; the title link is either
/// `a.OrganicTitle-Link` (current markup) or the anchor inside `h2`.
pub fn parse_yandex_html(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = selector("li.serp-item")?;
    let link_sel = selector("a.OrganicTitle-Link[href], h2 a[href]")?;
    let snippet_sel = selector(".OrganicTextContentSpan, .Organic-ContentWrapper .text-container, .organic__content-wrapper")?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(link_el) = element.select(&link_sel).next() else {
            continue;
        };
        let Some(href) = link_el.value().attr("href").filter(|h| is_outbound(h)) else {
            continue;
        };
        let title = element_text(link_el);
        if title.is_empty() {
            continue;
        }

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult::new(
            SearchEngine::Yandex.name(),
            title,
            href,
            snippet,
        ));
    }

    tracing::debug!(count = results.len(), "yandex results parsed");
    Ok(results)
}

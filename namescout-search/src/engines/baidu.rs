//! Baidu results page parser.
//!
//! Baidu title links point at `baidu.com/link?url=...` redirects that can
//! only be resolved by following them; the result container's `mu`
//! attribute usually carries the real destination, so it is preferred.

use scraper::Html;

use super::{element_text, is_outbound, selector};
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

/// Parse a Baidu HTML response into search results.
pub fn parse_baidu_html(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = selector("div.result, div.c-container")?;
    let title_sel = selector("h3")?;
    let link_sel = selector("h3 a[href]")?;
    let snippet_sel = selector(".c-abstract, .content-right_8Zs40, [class^=\"content-right\"]")?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };
        let title = element_text(title_el);
        if title.is_empty() {
            continue;
        }

        let link = element
            .value()
            .attr("mu")
            .filter(|mu| is_outbound(mu))
            .or_else(|| {
                element
                    .select(&link_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .filter(|h| is_outbound(h))
            });
        let Some(link) = link else {
            continue;
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult::new(
            SearchEngine::Baidu.name(),
            title,
            link,
            snippet,
        ));
    }

    // A result can match both container classes; keep the first.
    let mut seen = std::collections::HashSet::new();
    results.retain(|r| seen.insert(r.link.clone()));

    tracing::debug!(count = results.len(), "baidu results parsed");
    Ok(results)
}

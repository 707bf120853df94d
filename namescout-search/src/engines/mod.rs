//! HTML result extraction per search engine.
//!
//! Each module parses one engine's results page with CSS selectors.
//! [`HtmlExtractor`] dispatches on the engine name and falls back to the
//! [`generic`] outbound-anchor rule for unknown engines, or when an
//! engine's own selectors match nothing (markup drifts often).

pub mod baidu;
pub mod bing;
pub mod generic;
pub mod google;
pub mod yandex;

use scraper::{ElementRef, Selector};

use crate::engine::ResultExtractor;
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

pub use baidu::parse_baidu_html;
pub use bing::parse_bing_html;
pub use generic::parse_generic_html;
pub use google::parse_google_html;
pub use yandex::parse_yandex_html;

/// Default [`ResultExtractor`] backed by `scraper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl ResultExtractor for HtmlExtractor {
    fn extract(&self, body: &str, engine: &str) -> Result<Vec<SearchResult>, SearchError> {
        let specific = match SearchEngine::from_name(engine) {
            Some(SearchEngine::Google) => parse_google_html(body)?,
            Some(SearchEngine::Bing) => parse_bing_html(body)?,
            Some(SearchEngine::Yandex) => parse_yandex_html(body)?,
            Some(SearchEngine::Baidu) => parse_baidu_html(body)?,
            None => return parse_generic_html(body, engine),
        };
        if specific.is_empty() {
            tracing::debug!(engine, "engine selectors matched nothing, using generic rule");
            return parse_generic_html(body, engine);
        }
        Ok(specific)
    }
}

/// Parse a CSS selector, mapping failures to [`SearchError::Parse`].
pub(crate) fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("invalid selector {css}: {e:?}")))
}

/// Text content of an element with whitespace collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `true` for absolute http(s) links.
pub(crate) fn is_outbound(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

//! # namescout-search
//!
//! Concurrent person search over public search engines.
//!
//! Engines are scraped directly over HTTP; there are no API keys. A unified
//! search for a name runs three branches at once (plain engine queries,
//! social-platform site queries, file-sharing site queries), merges the
//! results by link and mines the aggregated text for entities.
//!
//! ## Design
//!
//! - Google, Bing, Yandex and Baidu pages parsed with CSS selectors
//! - Every network call goes through the [`Fetcher`] seam and the shared
//!   [`RateLimiter`] and [`PageCache`]
//! - Randomised courtesy delay between consecutive engine fetches
//! - Failures degrade to fewer results; a search never raises
//!
//! ## Security
//!
//! - Queries are logged only at trace level
//! - Snippets are trimmed and capped before returning

pub mod cache;
pub mod config;
pub mod engine;
pub mod engines;
pub mod entities;
pub mod error;
pub mod fetch;
pub mod http;
pub mod orchestrator;
pub mod sites;
pub mod throttle;
pub mod types;
pub mod urls;

pub use cache::PageCache;
pub use config::SearchConfig;
pub use engine::ResultExtractor;
pub use engines::HtmlExtractor;
pub use entities::{EntityExtractor, PatternExtractor, RawEntities};
pub use error::{Result, SearchError};
pub use fetch::{FetchContext, FetchResponse, Fetcher};
pub use http::HttpFetcher;
pub use orchestrator::{Branch, BranchReport, Outcome, SearchOrchestrator, UnifiedOptions};
pub use sites::{SiteCategory, REPOSITORY_SITES, SOCIAL_SITES};
pub use throttle::{DelayPolicy, RateLimiter};
pub use types::{Entities, EntityKind, SearchBundle, SearchEngine, SearchResult};

/// Run a unified search for `name` over HTTP with pattern-based entity
/// extraction.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, or
/// [`SearchError::Extraction`] if the entity patterns fail to build. Once
/// the search starts it cannot fail; see
/// [`SearchOrchestrator::unified_search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> namescout_search::Result<()> {
/// let config = namescout_search::SearchConfig::default();
/// let bundle = namescout_search::unified_search(
///     "Ana Garcia",
///     namescout_search::UnifiedOptions::default(),
///     config,
/// )
/// .await?;
/// for result in &bundle.results {
///     println!("{}: {}", result.title, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn unified_search(
    name: &str,
    options: UnifiedOptions,
    config: SearchConfig,
) -> Result<SearchBundle> {
    let orchestrator =
        SearchOrchestrator::new(config)?.with_entity_extractor(PatternExtractor::new()?);
    Ok(orchestrator.unified_search(name, options).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unified_search_validates_config_empty_engines() {
        let config = SearchConfig {
            engines: vec![],
            ..Default::default()
        };
        let result = unified_search("Ana", UnifiedOptions::default(), config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("engine"));
    }

    #[tokio::test]
    async fn unified_search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = unified_search("Ana", UnifiedOptions::default(), config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn zero_limit_skips_network() {
        let options = UnifiedOptions {
            limit: 0,
            ..Default::default()
        };
        let bundle = unified_search("Ana", options, SearchConfig::default())
            .await
            .expect("valid config");
        assert_eq!(bundle.count, 0);
        assert!(bundle.results.is_empty());
    }

    #[test]
    fn public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchOrchestrator>();
        assert_send_sync::<SearchBundle>();
        assert_send_sync::<SearchError>();
    }
}

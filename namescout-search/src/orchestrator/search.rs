//! Core search orchestrator: sequential per-engine fetch + extract inside a
//! branch, concurrent branches across a unified search.
//!
//! Within a branch every engine or site is queried one after another with a
//! courtesy delay between engines, so the shared rate limiter and the delay
//! policy bound the aggregate request rate. Branches run as separate tasks
//! and are joined in dispatch order.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::cache::PageCache;
use crate::config::SearchConfig;
use crate::engine::ResultExtractor;
use crate::engines::HtmlExtractor;
use crate::entities::EntityExtractor;
use crate::error::{Result, SearchError};
use crate::fetch::{FetchContext, Fetcher};
use crate::http::HttpFetcher;
use crate::sites::{site_query, SiteCategory};
use crate::throttle::{DelayPolicy, RateLimiter};
use crate::types::{Entities, SearchBundle, SearchEngine, SearchResult};
use crate::urls::is_engine_link;

use super::branch::{Branch, BranchReport, Outcome, UnifiedOptions, BRANCH_WORKERS};
use super::dedup::{build_text_buffer, deduplicate};

/// Fans queries out over engines, social sites and repository sites.
///
/// Cloning is cheap: clones share the fetcher, extractors, cache and rate
/// limiter. The orchestrator holds no other mutable state.
pub struct SearchOrchestrator<F: Fetcher = HttpFetcher> {
    config: Arc<SearchConfig>,
    fetcher: Arc<F>,
    extractor: Arc<dyn ResultExtractor>,
    entity_extractor: Option<Arc<dyn EntityExtractor>>,
    ctx: FetchContext,
    delay: DelayPolicy,
}

impl<F: Fetcher> Clone for SearchOrchestrator<F> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            fetcher: Arc::clone(&self.fetcher),
            extractor: Arc::clone(&self.extractor),
            entity_extractor: self.entity_extractor.clone(),
            ctx: self.ctx.clone(),
            delay: self.delay,
        }
    }
}

impl SearchOrchestrator<HttpFetcher> {
    /// Create an orchestrator using the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetcher> SearchOrchestrator<F> {
    /// Create an orchestrator around a custom fetcher.
    ///
    /// The cache, rate limiter and delay policy are built from `config`;
    /// the HTML extractor is the default. No entity extractor is set.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_fetcher(config: SearchConfig, fetcher: F) -> Result<Self> {
        config.validate()?;
        let limiter = RateLimiter::new(std::time::Duration::from_millis(
            config.min_request_interval_ms,
        ));
        let cache = PageCache::new(config.cache_ttl_seconds);
        let ctx = FetchContext::from_config(&config, limiter, cache);
        let delay = DelayPolicy::from_millis(config.request_delay_ms);
        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(HtmlExtractor),
            entity_extractor: None,
            ctx,
            delay,
        })
    }

    /// Replace the result extractor.
    #[must_use]
    pub fn with_extractor(mut self, extractor: impl ResultExtractor) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Run `extractor` over the aggregated text of every unified search.
    #[must_use]
    pub fn with_entity_extractor(mut self, extractor: impl EntityExtractor) -> Self {
        self.entity_extractor = Some(Arc::new(extractor));
        self
    }

    /// Replace the courtesy delay policy.
    #[must_use]
    pub fn with_delay_policy(mut self, delay: DelayPolicy) -> Self {
        self.delay = delay;
        self
    }

    /// Share an existing rate limiter.
    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.ctx.limiter = limiter;
        self
    }

    /// Share an existing page cache.
    #[must_use]
    pub fn with_cache(mut self, cache: PageCache) -> Self {
        self.ctx.cache = cache;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The transport in use.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Query every configured engine in order until `limit` results are
    /// collected.
    ///
    /// Unusable responses, transport errors and extraction errors count as
    /// zero results for that engine. Links to the engines' own pages are
    /// dropped. A courtesy delay follows every fetch.
    pub async fn search_engines(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let mut results = Vec::new();
        if limit == 0 {
            return results;
        }
        tracing::trace!(query, limit, "engine search");

        for engine in &self.config.engines {
            if results.len() >= limit {
                break;
            }
            match self.query_engine(*engine, query).await {
                Outcome::Found(found) => {
                    tracing::debug!(%engine, count = found.len(), "engine returned results");
                    results.extend(found);
                }
                Outcome::Empty { reason } => {
                    tracing::debug!(%engine, %reason, "engine returned nothing");
                }
            }
            self.delay.pause().await;
        }

        results.truncate(limit);
        results
    }

    /// Site-scoped search over the social platforms.
    pub async fn search_socials(&self, name: &str, limit: usize) -> Vec<SearchResult> {
        self.search_category(SiteCategory::Socials, name, limit).await
    }

    /// Site-scoped search over the file-sharing and repository sites.
    pub async fn search_repositories(&self, name: &str, limit: usize) -> Vec<SearchResult> {
        self.search_category(SiteCategory::Repositories, name, limit)
            .await
    }

    /// Run `"name" site:domain` for each site of `category` with the
    /// per-site limit, stopping once `limit` results are collected.
    pub async fn search_category(
        &self,
        category: SiteCategory,
        name: &str,
        limit: usize,
    ) -> Vec<SearchResult> {
        let mut results = Vec::new();
        for site in category.sites() {
            if results.len() >= limit {
                break;
            }
            let query = site_query(name, site);
            let found = self.search_engines(&query, self.config.per_site_limit).await;
            tracing::debug!(%category, site, count = found.len(), "site search finished");
            results.extend(found);
        }
        results.truncate(limit);
        results
    }

    /// Search engines, socials and repositories concurrently and merge.
    ///
    /// # Pipeline
    ///
    /// 1. Spawn the planned branches (see [`UnifiedOptions::plan`]) on a
    ///    pool of [`BRANCH_WORKERS`] tasks
    /// 2. Join in dispatch order; a failed branch is logged and contributes
    ///    nothing
    /// 3. Deduplicate by link, first occurrence wins
    /// 4. Build the aggregated text buffer from the deduplicated results
    /// 5. Truncate to `options.limit`
    /// 6. Run the entity extractor, if any, over the buffer
    ///
    /// Never fails: every error degrades to fewer results or empty entities.
    pub async fn unified_search(&self, name: &str, options: UnifiedOptions) -> SearchBundle {
        if options.limit == 0 {
            return SearchBundle::new(name, Vec::new(), Entities::new());
        }

        let reports = self.run_branches(name, options).await;

        let mut merged = Vec::new();
        for BranchReport { branch, outcome } in reports {
            match &outcome {
                Outcome::Found(results) => {
                    tracing::debug!(%branch, count = results.len(), "branch finished");
                }
                Outcome::Empty { reason } => {
                    tracing::warn!(%branch, %reason, "search branch failed");
                }
            }
            merged.extend(outcome.into_results());
        }

        let mut results = deduplicate(merged);
        let text = build_text_buffer(name, &results);
        results.truncate(options.limit);

        let entities = self.extract_entities(&text);
        SearchBundle::new(name, results, entities)
    }

    /// Spawn every planned branch and collect reports in dispatch order.
    pub async fn run_branches(&self, name: &str, options: UnifiedOptions) -> Vec<BranchReport> {
        let pool = Arc::new(Semaphore::new(BRANCH_WORKERS));

        let tasks: Vec<_> = options
            .plan()
            .into_iter()
            .map(|(branch, limit)| {
                let this = self.clone();
                let name = name.to_string();
                let pool = Arc::clone(&pool);
                let handle = tokio::spawn(async move {
                    let _permit = pool
                        .acquire_owned()
                        .await
                        .map_err(|e| SearchError::Branch(format!("worker pool closed: {e}")))?;
                    Ok::<_, SearchError>(this.run_branch(branch, &name, limit).await)
                });
                async move {
                    let outcome = match handle.await {
                        Ok(Ok(results)) => Outcome::Found(results),
                        Ok(Err(err)) => Outcome::empty(err.to_string()),
                        Err(join_err) => Outcome::empty(
                            SearchError::Branch(format!("{branch} task failed: {join_err}"))
                                .to_string(),
                        ),
                    };
                    BranchReport { branch, outcome }
                }
            })
            .collect();

        futures::future::join_all(tasks).await
    }

    async fn run_branch(&self, branch: Branch, name: &str, limit: usize) -> Vec<SearchResult> {
        match branch {
            Branch::Engines => self.search_engines(name, limit).await,
            Branch::Socials => self.search_socials(name, limit).await,
            Branch::Repositories => self.search_repositories(name, limit).await,
        }
    }

    /// Fetch and extract one engine's results page for `query`.
    async fn query_engine(&self, engine: SearchEngine, query: &str) -> Outcome {
        let url = engine.search_url(query);

        let response = match self.fetcher.fetch(&url, &self.ctx).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%engine, error = %err, "engine fetch failed");
                return Outcome::empty(err.to_string());
            }
        };
        if !response.is_usable() {
            return Outcome::empty(format!(
                "status {} with {} byte body",
                response.status,
                response.body.len()
            ));
        }

        let extracted = match self.extractor.extract(&response.body, engine.name()) {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(%engine, error = %err, "result extraction failed");
                return Outcome::empty(err.to_string());
            }
        };

        let kept = extracted
            .into_iter()
            .filter(|result| !is_engine_link(&result.link, SearchEngine::all()))
            .collect();
        Outcome::Found(kept)
    }

    fn extract_entities(&self, text: &str) -> Entities {
        let Some(ref extractor) = self.entity_extractor else {
            return Entities::new();
        };
        match extractor.extract(text) {
            Ok(raw) => raw.into_entities(),
            Err(err) => {
                tracing::warn!(error = %err, "entity extraction failed");
                Entities::new()
            }
        }
    }
}

//! Transport seam: the [`Fetcher`] trait and the per-request context.
//!
//! The orchestrator never talks to the network directly. Every page is
//! requested through a [`Fetcher`], which receives the shared rate limiter,
//! the shared page cache and the transport settings in a [`FetchContext`].

use std::collections::BTreeMap;
use std::time::Duration;

use crate::cache::PageCache;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::throttle::RateLimiter;

/// Status code and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body; may be empty.
    pub body: String,
}

impl FetchResponse {
    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with the given status and an empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// `true` for a 200 with a non-blank body, the only shape worth extracting.
    pub fn is_usable(&self) -> bool {
        self.status == 200 && !self.body.trim().is_empty()
    }
}

/// Everything a fetch needs besides the URL.
#[derive(Debug, Clone)]
pub struct FetchContext {
    /// Shared limiter; acquire before touching the network.
    pub limiter: RateLimiter,
    /// Shared page cache; consult before and fill after a successful fetch.
    pub cache: PageCache,
    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional proxy URL.
    pub proxy: Option<String>,
    /// Fixed User-Agent; `None` means rotate.
    pub user_agent: Option<String>,
}

impl FetchContext {
    /// Build a context from config plus the shared limiter and cache handles.
    pub fn from_config(config: &SearchConfig, limiter: RateLimiter, cache: PageCache) -> Self {
        Self {
            limiter,
            cache,
            headers: config.headers.clone(),
            timeout: config.timeout(),
            proxy: config.proxy.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// A pluggable page fetcher.
///
/// Implementations must be `Send + Sync` because one fetcher serves every
/// concurrent search branch. Returning `Ok` with a non-200 status is the
/// normal way to report an unusable page; `Err` is reserved for transport
/// failures. The orchestrator treats both as zero results.
pub trait Fetcher: Send + Sync + 'static {
    /// Fetch `url` honouring the limiter, cache and transport settings in `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] or [`SearchError::Timeout`] when the
    /// request cannot be completed.
    fn fetch(
        &self,
        url: &str,
        ctx: &FetchContext,
    ) -> impl std::future::Future<Output = Result<FetchResponse, SearchError>> + Send;
}

//! HTTP transport with User-Agent rotation for search engine requests.
//!
//! [`HttpFetcher`] is the production [`Fetcher`]: it consults the page cache,
//! waits on the shared rate limiter, then issues a GET with browser-like
//! headers. One [`reqwest::Client`] is kept per fetcher and rebuilt only when
//! the timeout or proxy changes, so cookies and connections carry over
//! between requests.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::error::SearchError;
use crate::fetch::{FetchContext, FetchResponse, Fetcher};

/// Realistic browser User-Agent strings, rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Transport settings a built client is tied to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClientKey {
    timeout: Duration,
    proxy: Option<String>,
}

impl ClientKey {
    fn of(ctx: &FetchContext) -> Self {
        Self {
            timeout: ctx.timeout,
            proxy: ctx.proxy.clone(),
        }
    }
}

/// Production fetcher backed by `reqwest`.
///
/// Clones share the underlying client and its cookie store.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Arc<Mutex<Option<(ClientKey, reqwest::Client)>>>,
}

impl HttpFetcher {
    /// Create a fetcher; the client is built on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared client for `ctx`, built on first use or after the
    /// transport settings change.
    fn client_for(&self, ctx: &FetchContext) -> Result<reqwest::Client, SearchError> {
        let key = ClientKey::of(ctx);
        let mut slot = self.client.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((ref built_for, ref client)) = *slot {
            if *built_for == key {
                return Ok(client.clone());
            }
        }
        tracing::debug!(timeout = ?key.timeout, proxied = key.proxy.is_some(), "building HTTP client");
        let client = build_client(ctx)?;
        *slot = Some((key, client.clone()));
        Ok(client)
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, ctx: &FetchContext) -> Result<FetchResponse, SearchError> {
        if let Some(body) = ctx.cache.get(url).await {
            tracing::trace!(url, "page cache hit");
            return Ok(FetchResponse::ok(body));
        }

        ctx.limiter.acquire().await;

        let client = self.client_for(ctx)?;
        let ua = match ctx.user_agent {
            Some(ref custom) => custom.as_str(),
            None => random_user_agent(),
        };
        let mut request = client.get(url).header(reqwest::header::USER_AGENT, ua);
        for (name, value) in &ctx.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout(format!("request exceeded {:?}", ctx.timeout))
            } else {
                SearchError::Http(format!("request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("response read failed: {e}")))?;

        tracing::trace!(status, bytes = body.len(), "response received");

        let fetched = FetchResponse { status, body };
        if fetched.is_usable() {
            ctx.cache.insert(url, fetched.body.clone()).await;
        }
        Ok(fetched)
    }
}

/// Build a [`reqwest::Client`] configured for search engine scraping.
///
/// The client has:
/// - Cookie store enabled (for consent pages)
/// - Timeout and proxy from the fetch context
/// - Brotli and gzip decompression
///
/// The User-Agent is set per request so it can rotate on a shared client.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the proxy is invalid or the client
/// cannot be constructed.
pub fn build_client(ctx: &FetchContext) -> Result<reqwest::Client, SearchError> {
    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .timeout(ctx.timeout)
        .redirect(reqwest::redirect::Policy::limited(10));

    if let Some(ref proxy) = ctx.proxy {
        let proxy = reqwest::Proxy::all(proxy.as_str())
            .map_err(|e| SearchError::Http(format!("invalid proxy: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PageCache;
    use crate::config::SearchConfig;
    use crate::throttle::RateLimiter;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_context(cache: PageCache) -> FetchContext {
        let config = SearchConfig {
            user_agent: Some("TestBot/1.0".into()),
            timeout_seconds: 5,
            ..Default::default()
        };
        FetchContext::from_config(&config, RateLimiter::unlimited(), cache)
    }

    #[test]
    fn random_user_agent_returns_valid_ua() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn build_client_with_default_context() {
        let ctx = test_context(PageCache::disabled());
        assert!(build_client(&ctx).is_ok());
    }

    #[test]
    fn build_client_with_proxy() {
        let mut ctx = test_context(PageCache::disabled());
        ctx.proxy = Some("http://127.0.0.1:8080".into());
        assert!(build_client(&ctx).is_ok());
    }

    #[tokio::test]
    async fn fetch_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "ana"))
            .and(header("user-agent", "TestBot/1.0"))
            .and(header("accept-language", "en-US,en;q=0.9"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new();
        let ctx = test_context(PageCache::disabled());
        let url = format!("{}/search?q=ana", server.uri());
        let response = fetcher.fetch(&url, &ctx).await.expect("fetch");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn non_200_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let ctx = test_context(PageCache::disabled());
        let response = HttpFetcher::new()
            .fetch(&format!("{}/search", server.uri()), &ctx)
            .await
            .expect("fetch");
        assert_eq!(response.status, 503);
        assert!(!response.is_usable());
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("cached body"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new();
        let ctx = test_context(PageCache::new(600));
        let url = format!("{}/search?q=ana", server.uri());
        let first = fetcher.fetch(&url, &ctx).await.expect("first fetch");
        let second = fetcher.fetch(&url, &ctx).await.expect("second fetch");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn error_pages_are_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(2)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new();
        let ctx = test_context(PageCache::new(600));
        let url = format!("{}/search?q=ana", server.uri());
        let _ = fetcher.fetch(&url, &ctx).await.expect("first fetch");
        let _ = fetcher.fetch(&url, &ctx).await.expect("second fetch");
    }

    #[tokio::test]
    async fn connection_refused_is_http_error() {
        let fetcher = HttpFetcher::new();
        let ctx = test_context(PageCache::disabled());
        let result = fetcher.fetch("http://127.0.0.1:9/search", &ctx).await;
        assert!(matches!(result, Err(SearchError::Http(_))));
    }

    #[tokio::test]
    async fn cookies_carry_over_between_fetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/consent"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "CONSENT=YES+; Path=/")
                    .set_body_string("consent saved"),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(header("cookie", "CONSENT=YES+"))
            .respond_with(ResponseTemplate::new(200).set_body_string("results"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new();
        let ctx = test_context(PageCache::disabled());
        let _ = fetcher
            .fetch(&format!("{}/consent", server.uri()), &ctx)
            .await
            .expect("consent fetch");
        let response = fetcher
            .fetch(&format!("{}/search", server.uri()), &ctx)
            .await
            .expect("search fetch");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "results");
    }

    #[tokio::test]
    async fn rotated_user_agent_is_sent_per_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = test_context(PageCache::disabled());
        ctx.user_agent = None;
        HttpFetcher::new()
            .fetch(&format!("{}/search", server.uri()), &ctx)
            .await
            .expect("fetch");

        let requests = server.received_requests().await.expect("recording enabled");
        let ua = requests[0]
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .expect("user-agent header");
        assert!(USER_AGENTS.contains(&ua));
    }
}

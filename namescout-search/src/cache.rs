//! In-memory page cache for fetched search result pages.
//!
//! Caches raw response bodies keyed by the normalised request URL. Uses
//! [`moka`] for async-friendly caching with TTL and bounded capacity.
//! A [`PageCache`] is a cheap handle: clones share the same storage, so one
//! cache can be handed to every concurrent search branch.

use std::time::Duration;

use moka::future::Cache;

/// Maximum number of cached pages.
const MAX_CACHE_ENTRIES: u64 = 512;

/// Shared, internally synchronised cache of page bodies.
#[derive(Clone)]
pub struct PageCache {
    inner: Option<Cache<String, String>>,
}

impl PageCache {
    /// Create a cache whose entries live for `ttl_seconds`.
    ///
    /// A TTL of 0 produces a disabled cache: lookups always miss and
    /// inserts are dropped.
    pub fn new(ttl_seconds: u64) -> Self {
        if ttl_seconds == 0 {
            return Self::disabled();
        }
        let inner = Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();
        Self { inner: Some(inner) }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Whether this cache stores entries at all.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Look up a cached body for `url`.
    pub async fn get(&self, url: &str) -> Option<String> {
        let cache = self.inner.as_ref()?;
        cache.get(&cache_key(url)).await
    }

    /// Store `body` for `url`.
    pub async fn insert(&self, url: &str, body: String) {
        if let Some(ref cache) = self.inner {
            cache.insert(cache_key(url), body).await;
        }
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Build a deterministic key: trimmed URL with the scheme and host lowercased.
fn cache_key(url: &str) -> String {
    let trimmed = url.trim();
    match url::Url::parse(trimmed) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_normalises_host_case() {
        assert_eq!(
            cache_key("HTTPS://WWW.Bing.com/search?q=Ana"),
            cache_key("https://www.bing.com/search?q=Ana")
        );
    }

    #[test]
    fn cache_key_keeps_query_case() {
        assert_ne!(
            cache_key("https://www.bing.com/search?q=Ana"),
            cache_key("https://www.bing.com/search?q=ana")
        );
    }

    #[test]
    fn cache_key_trims_whitespace() {
        assert_eq!(cache_key("  not a url  "), "not a url");
    }

    #[tokio::test]
    async fn cache_miss_returns_none() {
        let cache = PageCache::new(600);
        assert!(cache.get("https://nothing.example/").await.is_none());
    }

    #[tokio::test]
    async fn cache_insert_and_retrieve() {
        let cache = PageCache::new(600);
        cache
            .insert("https://www.google.com/search?q=ana", "<html>ana</html>".into())
            .await;
        let cached = cache.get("https://www.google.com/search?q=ana").await;
        assert_eq!(cached.as_deref(), Some("<html>ana</html>"));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let cache = PageCache::new(600);
        let other = cache.clone();
        cache.insert("https://a.example/", "body".into()).await;
        assert_eq!(other.get("https://a.example/").await.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn overwrite_same_key_updates_value() {
        let cache = PageCache::new(600);
        cache.insert("https://a.example/", "old".into()).await;
        cache.insert("https://a.example/", "new".into()).await;
        assert_eq!(cache.get("https://a.example/").await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn zero_ttl_disables_cache() {
        let cache = PageCache::new(0);
        assert!(!cache.is_enabled());
        cache.insert("https://a.example/", "body".into()).await;
        assert!(cache.get("https://a.example/").await.is_none());
    }
}

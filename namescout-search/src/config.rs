//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which engines are queried, transport settings,
//! caching, throttling and the courtesy delay. The defaults are tuned for
//! polite, sequential scraping.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::SearchEngine;

/// Configuration for the search orchestrator and its HTTP transport.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Deserializes from partial TOML/JSON;
/// missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Which search engines to query, in order. Queried sequentially per branch.
    pub engines: Vec<SearchEngine>,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Courtesy delay range in milliseconds `(min, max)` after every engine fetch.
    pub request_delay_ms: (u64, u64),
    /// How long fetched pages stay cached, in seconds. 0 disables caching.
    pub cache_ttl_seconds: u64,
    /// Minimum interval in milliseconds between the start of any two requests,
    /// enforced across all concurrent branches. 0 disables the limiter.
    pub min_request_interval_ms: u64,
    /// Results requested from the engines for each site-scoped social/repository query.
    pub per_site_limit: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Proxy URL applied to every request (`http://`, `https://` or `socks5://`).
    pub proxy: Option<String>,
    /// Extra request headers sent with every fetch.
    pub headers: BTreeMap<String, String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_owned(), "text/html,application/xhtml+xml".to_owned());
        headers.insert("Accept-Language".to_owned(), "en-US,en;q=0.9".to_owned());
        Self {
            engines: SearchEngine::all().to_vec(),
            timeout_seconds: 10,
            request_delay_ms: (800, 2500),
            cache_ttl_seconds: 600,
            min_request_interval_ms: 250,
            per_site_limit: 3,
            user_agent: None,
            proxy: None,
            headers,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `engines` must not be empty
    /// - `request_delay_ms.0` must be <= `request_delay_ms.1`
    /// - `per_site_limit` must be greater than 0
    /// - `proxy`, when set, must parse as a URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.engines.is_empty() {
            return Err(SearchError::Config(
                "at least one engine must be enabled".into(),
            ));
        }
        if self.request_delay_ms.0 > self.request_delay_ms.1 {
            return Err(SearchError::Config(
                "request_delay_ms min must be <= max".into(),
            ));
        }
        if self.per_site_limit == 0 {
            return Err(SearchError::Config(
                "per_site_limit must be greater than 0".into(),
            ));
        }
        if let Some(ref proxy) = self.proxy {
            url::Url::parse(proxy)
                .map_err(|e| SearchError::Config(format!("invalid proxy URL: {e}")))?;
        }
        Ok(())
    }

    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

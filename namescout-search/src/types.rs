//! Core types: search results, engine identification, bundles and entities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum number of characters kept in a result snippet.
pub const MAX_SNIPPET_CHARS: usize = 200;

/// A single search result returned from a search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Name of the engine that returned this result (see [`SearchEngine::name`]).
    pub engine: String,
    /// The title of the result page.
    pub title: String,
    /// The outbound URL of the result. Older producers call this field `url`.
    #[serde(alias = "url")]
    pub link: String,
    /// Text snippet, at most [`MAX_SNIPPET_CHARS`] characters.
    pub snippet: String,
}

impl SearchResult {
    /// Build a result, trimming every field and capping the snippet length.
    pub fn new(
        engine: impl Into<String>,
        title: impl AsRef<str>,
        link: impl AsRef<str>,
        snippet: impl AsRef<str>,
    ) -> Self {
        Self {
            engine: engine.into(),
            title: title.as_ref().trim().to_owned(),
            link: link.as_ref().trim().to_owned(),
            snippet: truncate_chars(snippet.as_ref().trim(), MAX_SNIPPET_CHARS),
        }
    }

    /// The key used to decide whether two results refer to the same page.
    pub fn identity(&self) -> &str {
        &self.link
    }
}

/// Truncate `s` to at most `max` characters without splitting a code point.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].trim_end().to_owned(),
        None => s.to_owned(),
    }
}

/// Search engines namescout can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Google web search.
    Google,
    /// Bing web search.
    Bing,
    /// Yandex web search.
    Yandex,
    /// Baidu web search.
    Baidu,
}

impl SearchEngine {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::Yandex => "yandex",
            Self::Baidu => "baidu",
        }
    }

    /// Query URL template; `{query}` is replaced by the form-encoded query.
    pub fn url_template(&self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com/search?q={query}",
            Self::Bing => "https://www.bing.com/search?q={query}",
            Self::Yandex => "https://yandex.com/search/?text={query}",
            Self::Baidu => "https://www.baidu.com/s?wd={query}",
        }
    }

    /// Brand label of the engine's registrable domains, e.g. `google` in
    /// `google.com` and `google.co.uk`.
    pub fn brand(&self) -> &'static str {
        self.name()
    }

    /// Registrable domains the engine serves from besides `brand.<tld>`.
    pub fn extra_domains(&self) -> &'static [&'static str] {
        match self {
            Self::Google => &["googleusercontent.com", "gstatic.com"],
            Self::Bing => &[],
            Self::Yandex => &["ya.ru"],
            Self::Baidu => &["bdstatic.com", "bdimg.com"],
        }
    }

    /// Build the search URL for `query`.
    pub fn search_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        self.url_template().replace("{query}", &encoded)
    }

    /// Look up an engine by its [`name`](Self::name), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Returns all available engine variants, in default query order.
    pub fn all() -> &'static [SearchEngine] {
        &[Self::Google, Self::Bing, Self::Yandex, Self::Baidu]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of entity mined from aggregated result text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Social profile URLs.
    Socials,
    /// Email addresses.
    Emails,
    /// Phone numbers.
    Phones,
    /// Outbound links.
    Links,
    /// Usernames / handles.
    Usernames,
    /// Person names.
    Names,
}

/// Extracted entities keyed by kind. Empty when no extractor ran or it failed.
pub type Entities = BTreeMap<EntityKind, Vec<String>>;

/// The unified result of a multi-source search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBundle {
    /// The name that was searched for.
    pub query: String,
    /// Deduplicated results, first-seen order, at most the requested limit.
    pub results: Vec<SearchResult>,
    /// Entities extracted from the aggregated text.
    pub entities: Entities,
    /// Always `results.len()`.
    pub count: usize,
}

impl SearchBundle {
    /// Assemble a bundle, deriving `count` from `results`.
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>, entities: Entities) -> Self {
        let count = results.len();
        Self {
            query: query.into(),
            results,
            entities,
            count,
        }
    }
}

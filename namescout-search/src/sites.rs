//! Static site tables for the category searches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Social platforms searched by the socials branch.
pub const SOCIAL_SITES: &[&str] = &[
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "tiktok.com",
    "github.com",
    "linkedin.com",
];

/// File-sharing and code/paste repositories searched by the repositories branch.
pub const REPOSITORY_SITES: &[&str] = &[
    "pastebin.com",
    "mediafire.com",
    "mega.nz",
    "drive.google.com",
    "github.com",
];

/// A site-scoped search category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteCategory {
    /// Social platforms.
    Socials,
    /// File-sharing and repository sites.
    Repositories,
}

impl SiteCategory {
    /// The sites searched for this category, in query order.
    pub fn sites(&self) -> &'static [&'static str] {
        match self {
            Self::Socials => SOCIAL_SITES,
            Self::Repositories => REPOSITORY_SITES,
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Socials => "socials",
            Self::Repositories => "repositories",
        }
    }
}

impl fmt::Display for SiteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build a site-scoped query: `"name" site:domain`.
pub fn site_query(name: &str, domain: &str) -> String {
    let name = name.trim().trim_matches('"').trim();
    format!("\"{name}\" site:{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_query_quotes_name() {
        assert_eq!(
            site_query("Juan Perez", "github.com"),
            "\"Juan Perez\" site:github.com"
        );
    }

    #[test]
    fn site_query_does_not_double_quote() {
        assert_eq!(
            site_query(" \"Juan Perez\" ", "mega.nz"),
            "\"Juan Perez\" site:mega.nz"
        );
    }

    #[test]
    fn category_tables() {
        assert_eq!(SiteCategory::Socials.sites().len(), 6);
        assert_eq!(SiteCategory::Repositories.sites().len(), 5);
        assert_eq!(SiteCategory::Repositories.sites()[0], "pastebin.com");
        assert_eq!(SiteCategory::Socials.to_string(), "socials");
    }
}

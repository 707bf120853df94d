//! Entity extraction over aggregated search result text.
//!
//! The orchestrator builds one text buffer per unified search and hands it
//! to an optional [`EntityExtractor`]. Extractor output uses a fixed schema,
//! [`RawEntities`], whose `social_profiles` key is published to callers as
//! [`EntityKind::Socials`]; every other key keeps its name.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::sites::SOCIAL_SITES;
use crate::types::{Entities, EntityKind};
use crate::urls::{domain_of, host_matches};

/// Output schema of an entity extractor. Absent keys are left out of the
/// merged [`Entities`]; present-but-empty keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntities {
    /// Profile URLs on social platforms. Renamed to `socials` on merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_profiles: Option<Vec<String>>,
    /// Email addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    /// Phone numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<String>>,
    /// Outbound links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    /// `@handle` style usernames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usernames: Option<Vec<String>>,
    /// Person names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl RawEntities {
    /// Convert into the published mapping, renaming `social_profiles` to `socials`.
    pub fn into_entities(self) -> Entities {
        let mut entities = Entities::new();
        let pairs = [
            (EntityKind::Socials, self.social_profiles),
            (EntityKind::Emails, self.emails),
            (EntityKind::Phones, self.phones),
            (EntityKind::Links, self.links),
            (EntityKind::Usernames, self.usernames),
            (EntityKind::Names, self.names),
        ];
        for (kind, values) in pairs {
            if let Some(values) = values {
                entities.insert(kind, values);
            }
        }
        entities
    }
}

/// Mines structured entities from free text.
pub trait EntityExtractor: Send + Sync + 'static {
    /// Extract entities from `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Extraction`] on failure; the orchestrator logs
    /// it and returns an empty entity mapping.
    fn extract(&self, text: &str) -> Result<RawEntities, SearchError>;
}

/// Regex-based [`EntityExtractor`] for emails, phones, links, social
/// profiles and `@usernames`. Does not attempt person names.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    email: Regex,
    phone: Regex,
    link: Regex,
    handle: Regex,
}

/// Minimum digits for a phone-number match.
const MIN_PHONE_DIGITS: usize = 8;

impl PatternExtractor {
    /// Compile the extraction patterns.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Extraction`] if a pattern fails to compile.
    pub fn new() -> Result<Self, SearchError> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| SearchError::Extraction(format!("invalid pattern: {e}")))
        };
        Ok(Self {
            email: compile(r"(?i)\b[a-z0-9][a-z0-9._%+-]*@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}\b")?,
            phone: compile(r"\+?\d[\d\s().-]{6,}\d")?,
            link: compile(r#"https?://[^\s<>"'()\[\]]+"#)?,
            handle: compile(r"(?:^|[^\w@.])@([A-Za-z0-9_][A-Za-z0-9_.]{1,29})")?,
        })
    }
}

impl EntityExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> Result<RawEntities, SearchError> {
        let emails = unique(
            self.email
                .find_iter(text)
                .map(|m| m.as_str().to_ascii_lowercase()),
        );

        let phones = unique(
            self.phone
                .find_iter(text)
                .map(|m| m.as_str().trim().to_string())
                .filter(|p| p.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS),
        );

        let links = unique(
            self.link
                .find_iter(text)
                .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':']).to_string()),
        );

        let social_profiles = unique(links.iter().filter(|link| is_social_profile(link)).cloned());

        let usernames = unique(
            self.handle
                .captures_iter(text)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str().trim_end_matches('.').to_ascii_lowercase()),
        );

        Ok(RawEntities {
            social_profiles: Some(social_profiles),
            emails: Some(emails),
            phones: Some(phones),
            links: Some(links),
            usernames: Some(usernames),
            names: None,
        })
    }
}

/// A link on a social site with a non-empty path.
fn is_social_profile(link: &str) -> bool {
    let Some(host) = domain_of(link) else {
        return false;
    };
    let on_social = SOCIAL_SITES.iter().any(|site| host_matches(&host, site));
    let has_path = url::Url::parse(link)
        .map(|u| u.path().trim_matches('/').len() > 1)
        .unwrap_or(false);
    on_social && has_path
}

/// Collect preserving first-seen order.
fn unique(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PatternExtractor {
        PatternExtractor::new().expect("patterns compile")
    }

    #[test]
    fn merge_renames_social_profiles() {
        let raw = RawEntities {
            social_profiles: Some(vec!["https://github.com/ana".into()]),
            emails: Some(vec!["ana@example.com".into()]),
            ..Default::default()
        };
        let entities = raw.into_entities();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[&EntityKind::Socials], vec!["https://github.com/ana"]);
        assert_eq!(entities[&EntityKind::Emails], vec!["ana@example.com"]);
        assert!(!entities.contains_key(&EntityKind::Names));
    }

    #[test]
    fn raw_entities_deserialize_partial_schema() {
        let raw: RawEntities =
            serde_json::from_str(r#"{"social_profiles":["x"],"phones":[]}"#).expect("parse");
        assert_eq!(raw.social_profiles, Some(vec!["x".to_string()]));
        assert_eq!(raw.phones, Some(vec![]));
        assert!(raw.emails.is_none());
    }

    #[test]
    fn extracts_emails_lowercased_and_unique() {
        let raw = extractor()
            .extract("Contact Ana.Garcia@Example.com or ana.garcia@example.com today")
            .expect("extract");
        assert_eq!(raw.emails, Some(vec!["ana.garcia@example.com".to_string()]));
    }

    #[test]
    fn extracts_phone_numbers_with_enough_digits() {
        let raw = extractor()
            .extract("Call +34 612 345 678 or 555-1234, year 2024")
            .expect("extract");
        assert_eq!(raw.phones, Some(vec!["+34 612 345 678".to_string()]));
    }

    #[test]
    fn extracts_links_and_social_profiles() {
        let text = "See https://github.com/mjgarcia, https://example.com/about. and https://twitter.com/";
        let raw = extractor().extract(text).expect("extract");
        assert_eq!(
            raw.links,
            Some(vec![
                "https://github.com/mjgarcia".to_string(),
                "https://example.com/about".to_string(),
                "https://twitter.com/".to_string(),
            ])
        );
        assert_eq!(
            raw.social_profiles,
            Some(vec!["https://github.com/mjgarcia".to_string()])
        );
    }

    #[test]
    fn extracts_handles_but_not_email_domains() {
        let raw = extractor()
            .extract("Follow @MJGarcia and @dev_maria. Mail mj@garcia.dev")
            .expect("extract");
        assert_eq!(
            raw.usernames,
            Some(vec!["mjgarcia".to_string(), "dev_maria".to_string()])
        );
    }

    #[test]
    fn names_are_not_extracted() {
        let raw = extractor().extract("Maria Garcia").expect("extract");
        assert!(raw.names.is_none());
        assert!(!raw.into_entities().contains_key(&EntityKind::Names));
    }
}

//! Email address candidates from a name and optional domain hints.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::normalize::NormalizedName;
use super::variants::{generate_name_variants, sanitize_username};

/// Webmail domains always tried after any caller-supplied hints.
pub const DEFAULT_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "yahoo.com",
    "outlook.com",
    "live.com",
];

/// Email generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    /// Domains tried before [`DEFAULT_DOMAINS`], e.g. an employer's domain.
    pub domain_hints: Vec<String>,
    /// Maximum addresses per domain.
    pub max_per_domain: usize,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            domain_hints: Vec::new(),
            max_per_domain: 6,
        }
    }
}

impl EmailOptions {
    /// Generate candidates for `fullname` with these settings.
    pub fn generate(&self, fullname: &str) -> Vec<String> {
        generate_emails(fullname, &self.domain_hints, self.max_per_domain)
    }
}

/// Candidate email addresses for `fullname`.
///
/// Domains are the cleaned `domain_hints` followed by [`DEFAULT_DOMAINS`].
/// Usernames are the first `max_per_domain` space-free variants of the name,
/// then `first.last`, `firstlast`, `flast` and `first_last` when the name has
/// at least two parts. Usernames that sanitize to nothing are skipped. Each
/// domain receives at most `max_per_domain` addresses; the result holds no
/// duplicates and keeps first-seen order.
///
/// ```
/// use namescout::names::generate_emails;
///
/// let emails = generate_emails("Juan Pérez", &["@Acme.io".to_string()], 2);
/// assert_eq!(emails[..2], ["juan@acme.io", "perez@acme.io"]);
/// assert_eq!(emails.len(), 2 * 6);
/// ```
pub fn generate_emails(
    fullname: &str,
    domain_hints: &[String],
    max_per_domain: usize,
) -> Vec<String> {
    if max_per_domain == 0 {
        return Vec::new();
    }

    let domains: Vec<String> = domain_hints
        .iter()
        .filter_map(|hint| clean_domain(hint))
        .chain(DEFAULT_DOMAINS.iter().map(|d| (*d).to_string()))
        .collect();

    let usernames = username_pool(fullname, max_per_domain);
    if usernames.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut emails = Vec::new();
    for domain in &domains {
        let addresses = usernames
            .iter()
            .map(|user| sanitize_username(user))
            .filter(|user| !user.is_empty())
            .take(max_per_domain)
            .map(|user| format!("{user}@{domain}"));
        for address in addresses {
            if seen.insert(address.clone()) {
                emails.push(address);
            }
        }
    }

    tracing::debug!(
        domains = domains.len(),
        count = emails.len(),
        "email candidates generated"
    );
    emails
}

/// First `limit` space-free variants plus the classic corporate forms.
fn username_pool(fullname: &str, limit: usize) -> Vec<String> {
    let mut pool: Vec<String> = generate_name_variants(fullname)
        .into_iter()
        .filter(|v| !v.contains(' '))
        .take(limit)
        .collect();

    let name = NormalizedName::parse(fullname);
    let parts = name.parts();
    if let [first, .., last] = parts[..] {
        let f: String = first.chars().take(1).collect();
        let corporate: BTreeSet<String> = [
            format!("{first}.{last}"),
            format!("{first}{last}"),
            format!("{f}{last}"),
            format!("{first}_{last}"),
        ]
        .into_iter()
        .collect();
        pool.extend(corporate);
    }

    let mut seen = HashSet::new();
    pool.retain(|user| seen.insert(user.clone()));
    pool
}

/// Trim, lowercase and drop a leading `@`; `None` when nothing remains.
fn clean_domain(hint: &str) -> Option<String> {
    let cleaned = hint.trim().trim_start_matches('@').trim().to_lowercase();
    (!cleaned.is_empty()).then_some(cleaned)
}

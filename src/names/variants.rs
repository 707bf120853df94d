//! Name variant and username candidate generation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::normalize::NormalizedName;
use super::shape::{NameShape, UsernameSeed};

/// Variants of one name, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameVariants {
    /// Space-separated full-name orderings, generation order, no duplicates.
    pub full_names: Vec<String>,
    /// Username candidates ordered by length then lexicographically,
    /// excluding any already present in `full_names`.
    pub usernames: Vec<String>,
}

impl NameVariants {
    /// Generate variants for a raw full name.
    pub fn generate(fullname: &str) -> Self {
        let name = NormalizedName::parse(fullname);
        let Some(shape) = NameShape::of(&name) else {
            return Self::default();
        };

        let mut seen = HashSet::new();
        let full_names: Vec<String> = shape
            .full_names()
            .into_iter()
            .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|v| !v.is_empty() && seen.insert(v.clone()))
            .collect();

        let mut candidates: Vec<String> = shape
            .username_seeds()
            .iter()
            .flat_map(username_candidates)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let usernames = candidates
            .into_iter()
            .filter(|u| seen.insert(u.clone()))
            .collect();

        Self {
            full_names,
            usernames,
        }
    }

    /// Full names followed by usernames.
    pub fn into_list(self) -> Vec<String> {
        let mut list = self.full_names;
        list.extend(self.usernames);
        list
    }

    /// `true` when the name normalized to nothing.
    pub fn is_empty(&self) -> bool {
        self.full_names.is_empty() && self.usernames.is_empty()
    }
}

/// Ordered variant list for a raw full name: full-name orderings first,
/// then username candidates. Empty input yields an empty list.
///
/// ```
/// use namescout::names::generate_name_variants;
///
/// let variants = generate_name_variants("Juan Pérez");
/// assert_eq!(&variants[..4], ["juan perez", "perez juan", "juan", "perez"]);
/// assert!(variants.contains(&"jperez".to_string()));
/// ```
pub fn generate_name_variants(fullname: &str) -> Vec<String> {
    NameVariants::generate(fullname).into_list()
}

/// Lowercase `raw` and drop every character outside `[a-z0-9._-]`.
pub fn sanitize_username(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Sanitized username candidates for one seed, in generation order.
fn username_candidates(seed: &UsernameSeed<'_>) -> Vec<String> {
    let first = seed.first;
    let f = initial(first);
    let mut raw = Vec::new();

    if let Some(last) = seed.last {
        let l = initial(last);
        raw.extend([
            format!("{first}.{last}"),
            format!("{first}_{last}"),
            format!("{first}{last}"),
            format!("{f}{last}"),
            format!("{first}{l}"),
            format!("{first}-{last}"),
            format!("{last}.{first}"),
            format!("{f}.{last}"),
        ]);
        if let Some(second) = seed.second {
            let s = initial(second);
            raw.extend([format!("{f}{s}{last}"), format!("{f}.{s}.{last}")]);
        }
    }
    if let Some(second) = seed.second {
        raw.extend([
            format!("{first}.{second}"),
            format!("{first}_{second}"),
            format!("{first}{second}"),
            format!("{f}{second}"),
        ]);
    }
    raw.extend([first.to_string(), format!("{f}{first}")]);

    raw.iter()
        .map(|c| sanitize_username(c))
        .filter(|c| !c.is_empty())
        .collect()
}

fn initial(token: &str) -> &str {
    token
        .char_indices()
        .nth(1)
        .map_or(token, |(end, _)| &token[..end])
}

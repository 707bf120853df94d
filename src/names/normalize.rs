//! Name normalization: accent stripping, lowercasing, whitespace collapse.

use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a raw name.
///
/// Applies compatibility decomposition (NFKD), drops every combining mark,
/// lowercases, and collapses whitespace runs to a single space with no
/// leading or trailing space. Total and idempotent.
///
/// ```
/// use namescout::names::normalize;
///
/// assert_eq!(normalize("  José   PÉREZ "), "jose perez");
/// assert_eq!(normalize(&normalize("Ñandú")), "nandu");
/// ```
pub fn normalize(input: &str) -> String {
    // Lowercasing can reintroduce marks (`İ` -> `i̇`), so strip twice.
    let lowered = strip_marks(input).to_lowercase();
    strip_marks(&lowered)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize an optional name; absent input yields `""`.
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

/// Normalize a JSON value; anything but a string yields `""`.
pub fn normalize_value(value: &serde_json::Value) -> String {
    normalize_opt(value.as_str())
}

fn strip_marks(input: &str) -> String {
    input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// A normalized name: lowercase, accent-free, single-spaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalize `input`.
    pub fn parse(input: &str) -> Self {
        Self(normalize(input))
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if nothing survived normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The space-separated parts, in order.
    pub fn parts(&self) -> Vec<&str> {
        self.0.split(' ').filter(|p| !p.is_empty()).collect()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

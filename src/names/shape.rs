//! Token-count dispatch over a normalized name.
//!
//! Names are read as Hispanic-style `given [given] surname1 [surname2]`:
//! the first token is always a given name, the last two tokens of a long
//! name are the surnames, and any middle tokens beyond the second given
//! name are ignored.

use super::normalize::NormalizedName;

/// The shape of a normalized name, carrying exactly the tokens each case uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameShape<'a> {
    /// One token.
    Single(&'a str),
    /// Given name and surname.
    Pair { first: &'a str, surname: &'a str },
    /// Given name and two surnames.
    Triple {
        first: &'a str,
        surname1: &'a str,
        surname2: &'a str,
    },
    /// Two given names and the last two tokens as surnames.
    FourPlus {
        first: &'a str,
        second: &'a str,
        surname1: &'a str,
        surname2: &'a str,
    },
}

/// Inputs to username synthesis: a first token, an optional second token
/// contributing its initial, and an optional last token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernameSeed<'a> {
    pub first: &'a str,
    pub second: Option<&'a str>,
    pub last: Option<&'a str>,
}

impl<'a> UsernameSeed<'a> {
    fn new(first: &'a str, second: Option<&'a str>, last: Option<&'a str>) -> Self {
        Self {
            first,
            second,
            last,
        }
    }
}

impl<'a> NameShape<'a> {
    /// Classify a normalized name. `None` when the name is empty.
    pub fn of(name: &'a NormalizedName) -> Option<Self> {
        Self::from_parts(&name.parts())
    }

    /// Classify already-split, non-empty tokens.
    pub fn from_parts(parts: &[&'a str]) -> Option<Self> {
        match *parts {
            [] => None,
            [single] => Some(Self::Single(single)),
            [first, surname] => Some(Self::Pair { first, surname }),
            [first, surname1, surname2] => Some(Self::Triple {
                first,
                surname1,
                surname2,
            }),
            [first, second, .., surname1, surname2] => Some(Self::FourPlus {
                first,
                second,
                surname1,
                surname2,
            }),
        }
    }

    /// Full-name orderings in generation order. May repeat when tokens repeat.
    pub fn full_names(&self) -> Vec<String> {
        match *self {
            Self::Single(a) => vec![a.to_string()],
            Self::Pair { first, surname } => vec![
                format!("{first} {surname}"),
                format!("{surname} {first}"),
                first.to_string(),
                surname.to_string(),
            ],
            Self::Triple {
                first,
                surname1: s1,
                surname2: s2,
            } => vec![
                format!("{s1} {s2} {first}"),
                format!("{first} {s1} {s2}"),
                format!("{first} {s2}"),
                format!("{first} {s1}"),
                format!("{s1} {first}"),
                format!("{s2} {first}"),
            ],
            Self::FourPlus {
                first,
                second,
                surname1: s1,
                surname2: s2,
            } => vec![
                format!("{first} {s1} {s2}"),
                format!("{second} {s1} {s2}"),
                format!("{s1} {s2} {first} {second}"),
                format!("{first} {second} {s1}"),
                format!("{first} {second} {s2}"),
                format!("{first} {s1}"),
                format!("{first} {s2}"),
                format!("{second} {s1}"),
                format!("{second} {s2}"),
                format!("{first} {second}"),
                format!("{s1} {s2}"),
                format!("{s2} {s1}"),
            ],
        }
    }

    /// Seeds for username synthesis.
    pub fn username_seeds(&self) -> Vec<UsernameSeed<'a>> {
        match *self {
            Self::Single(a) => vec![UsernameSeed::new(a, None, None)],
            Self::Pair { first, surname } => vec![
                UsernameSeed::new(first, None, Some(surname)),
                UsernameSeed::new(first, None, None),
            ],
            Self::Triple {
                first,
                surname1,
                surname2,
            } => vec![
                UsernameSeed::new(first, None, Some(surname1)),
                UsernameSeed::new(first, None, Some(surname2)),
                UsernameSeed::new(first, None, None),
            ],
            Self::FourPlus {
                first,
                second,
                surname1,
                surname2,
            } => vec![
                UsernameSeed::new(first, Some(second), Some(surname1)),
                UsernameSeed::new(first, Some(second), Some(surname2)),
                UsernameSeed::new(first, None, Some(surname1)),
                UsernameSeed::new(second, None, Some(surname1)),
            ],
        }
    }
}

//! Identity enumeration: normalization, name variants, usernames, emails.
//!
//! Everything here is deterministic string transformation with no I/O.
//! A raw name is normalized, classified by token count into a [`NameShape`],
//! and expanded into full-name orderings and username candidates; email
//! candidates combine those usernames with domain hints and webmail defaults.

pub mod emails;
pub mod normalize;
pub mod shape;
pub mod variants;

pub use emails::{DEFAULT_DOMAINS, EmailOptions, generate_emails};
pub use normalize::{NormalizedName, normalize, normalize_opt, normalize_value};
pub use shape::{NameShape, UsernameSeed};
pub use variants::{NameVariants, generate_name_variants, sanitize_username};

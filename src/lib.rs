//! # namescout
//!
//! Candidate identity enumeration and concurrent people search.
//!
//! Given a full name, namescout produces normalized name orderings, username
//! candidates and email address candidates ([`names`]), and runs a unified
//! search across search engines, social platforms and file-sharing sites
//! through the [`search`] crate.
//!
//! ```
//! let variants = namescout::generate_name_variants("Juan Pérez");
//! assert_eq!(variants[0], "juan perez");
//!
//! let emails = namescout::generate_emails("Juan Pérez", &[], 2);
//! assert_eq!(emails[0], "juan@gmail.com");
//! ```

pub mod config;
pub mod error;
pub mod names;

pub use namescout_search as search;

pub use config::ScoutConfig;
pub use error::{Result, ScoutError};
pub use names::{
    EmailOptions, NameShape, NameVariants, NormalizedName, generate_emails,
    generate_name_variants, normalize,
};

//! Search orchestrator: sequential engines per branch, concurrent branches,
//! link dedup and entity merge.
//!
//! A unified search dispatches up to three branches (engines, socials,
//! repositories), joins them in dispatch order, deduplicates by link, and
//! hands the aggregated text to an optional entity extractor.

pub mod branch;
pub mod dedup;
pub mod search;

pub use branch::{Branch, BranchReport, Outcome, UnifiedOptions, BRANCH_WORKERS};
pub use search::SearchOrchestrator;

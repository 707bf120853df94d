//! Branch planning and explicit per-source outcomes.
//!
//! Every engine fetch and every unified-search branch ends in an
//! [`Outcome`]: either results, or empty with the reason it came up empty.
//! Outcomes are joined without aborting the call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::SearchResult;

/// Maximum number of branch tasks running at once.
pub const BRANCH_WORKERS: usize = 3;

/// One of the concurrent search categories of a unified search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// Plain query against every configured engine.
    Engines,
    /// Site-scoped queries against social platforms.
    Socials,
    /// Site-scoped queries against file-sharing and repository sites.
    Repositories,
}

impl Branch {
    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Engines => "engines",
            Self::Socials => "socials",
            Self::Repositories => "repositories",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of querying one source (an engine, a site or a whole branch).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The source produced these results (possibly none).
    Found(Vec<SearchResult>),
    /// The source failed; it contributes nothing.
    Empty {
        /// Why nothing was produced.
        reason: String,
    },
}

impl Outcome {
    /// An empty outcome with the given reason.
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::Empty {
            reason: reason.into(),
        }
    }

    /// The results, or nothing for a failed source.
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            Self::Found(results) => results,
            Self::Empty { .. } => Vec::new(),
        }
    }

    /// `true` if the source failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// The outcome of one unified-search branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchReport {
    /// Which branch ran.
    pub branch: Branch,
    /// What it produced.
    pub outcome: Outcome,
}

/// Options for a unified search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifiedOptions {
    /// Maximum number of results in the bundle.
    pub limit: usize,
    /// Run the social-platform branch.
    pub include_socials: bool,
    /// Run the file-sharing/repository branch.
    pub include_repos: bool,
}

impl Default for UnifiedOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            include_socials: true,
            include_repos: true,
        }
    }
}

impl UnifiedOptions {
    /// Branches to dispatch, in dispatch order, with their result limits.
    ///
    /// Engines get the full limit, socials a third and repositories a
    /// quarter, each rounded down with a floor of 1.
    pub fn plan(&self) -> Vec<(Branch, usize)> {
        let mut plan = vec![(Branch::Engines, self.limit)];
        if self.include_socials {
            plan.push((Branch::Socials, (self.limit / 3).max(1)));
        }
        if self.include_repos {
            plan.push((Branch::Repositories, (self.limit / 4).max(1)));
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_runs_all_branches() {
        let plan = UnifiedOptions::default().plan();
        assert_eq!(
            plan,
            vec![
                (Branch::Engines, 10),
                (Branch::Socials, 3),
                (Branch::Repositories, 2)
            ]
        );
    }

    #[test]
    fn small_limits_floor_at_one() {
        let plan = UnifiedOptions {
            limit: 2,
            ..Default::default()
        }
        .plan();
        assert_eq!(
            plan,
            vec![
                (Branch::Engines, 2),
                (Branch::Socials, 1),
                (Branch::Repositories, 1)
            ]
        );
    }

    #[test]
    fn disabled_branches_are_not_planned() {
        let plan = UnifiedOptions {
            limit: 12,
            include_socials: false,
            include_repos: true,
        }
        .plan();
        assert_eq!(plan, vec![(Branch::Engines, 12), (Branch::Repositories, 3)]);

        let plan = UnifiedOptions {
            limit: 12,
            include_socials: false,
            include_repos: false,
        }
        .plan();
        assert_eq!(plan, vec![(Branch::Engines, 12)]);
    }

    #[test]
    fn plan_never_exceeds_worker_pool() {
        assert!(UnifiedOptions::default().plan().len() <= BRANCH_WORKERS);
    }

    #[test]
    fn outcome_into_results() {
        let found = Outcome::Found(vec![SearchResult::new("google", "A", "https://a.com", "")]);
        assert!(!found.is_failure());
        assert_eq!(found.into_results().len(), 1);

        let empty = Outcome::empty("status 500");
        assert!(empty.is_failure());
        assert!(empty.into_results().is_empty());
    }

    #[test]
    fn branch_display() {
        assert_eq!(Branch::Repositories.to_string(), "repositories");
    }
}

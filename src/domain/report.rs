//! Final repository report

use super::{ActivityTrends, Contributor, DependencyReport, IssueHealth};
use serde::{Deserialize, Serialize};

/// The complete health report for one analyzed repository
///
/// Assembled once per run from freshly fetched data and discarded after
/// output; nothing here is persisted or cached across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoReport {
    /// Full repository name ("owner/repo")
    pub repo_name: String,
    /// Repository web URL
    pub repo_url: String,
    /// Repository description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Star count
    pub stars: u64,
    /// Fork count
    pub forks: u64,
    /// License name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Timestamp of the last push, as reported by GitHub
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Commit and issue activity trends
    pub activity: ActivityTrends,
    /// Top contributors by commit count (at most 5)
    pub top_contributors: Vec<Contributor>,
    /// Open-issue health counters
    pub issues: IssueHealth,
    /// Composite health score in [0, 100]
    pub health_score: f64,
    /// One report per recognized dependency manifest
    pub dependencies: Vec<DependencyReport>,
    /// AI-generated narrative summary (or the fixed fallback text)
    pub summary: String,
}

//! Wire records returned by the GitHub REST API
//!
//! These are the raw inputs to the profiling pipeline. Timestamps are
//! kept as the ISO-8601 strings GitHub sends ("Z"-suffixed UTC); parsing
//! happens at the point of use so a malformed value degrades only the
//! aggregate that needed it.

use serde::{Deserialize, Serialize};

/// Repository metadata from `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoDetails {
    /// Full name ("owner/repo")
    pub full_name: String,
    /// Web URL
    pub html_url: String,
    /// Repository description
    pub description: Option<String>,
    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,
    /// Fork count
    #[serde(default)]
    pub forks_count: u64,
    /// License, if one is declared
    pub license: Option<License>,
    /// Timestamp of the last push
    pub pushed_at: Option<String>,
}

/// License object nested in repository metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// Human-readable license name
    pub name: String,
}

impl RepoDetails {
    /// Returns the license name, if a license is declared
    pub fn license_name(&self) -> Option<&str> {
        self.license.as_ref().map(|l| l.name.as_str())
    }
}

/// One issue from `GET /repos/{owner}/{repo}/issues?state=all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// "open" or "closed"
    pub state: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last-update timestamp
    pub updated_at: String,
    /// Closing timestamp, absent while the issue is open
    pub closed_at: Option<String>,
    /// Labels attached to the issue
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl IssueRecord {
    /// Returns true if the issue is currently open
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

/// An issue label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label name
    pub name: String,
}

/// One contributor from `GET /repos/{owner}/{repo}/contributors`
///
/// The endpoint returns records ordered by contribution count descending;
/// the profiler relies on that order and performs no sorting of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorRecord {
    /// Login name
    pub login: String,
    /// Contribution count
    pub contributions: u64,
}

/// One week of `GET /repos/{owner}/{repo}/stats/commit_activity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitWeek {
    /// Total commits in this week
    pub total: u64,
    /// Week start as a unix timestamp
    #[serde(default)]
    pub week: i64,
}

/// One entry of the repository root listing from the contents API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootEntry {
    /// File or directory name
    pub name: String,
    /// Path relative to the repository root
    pub path: String,
}

/// File content response from the contents API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Content encoding, normally "base64"
    pub encoding: String,
    /// Encoded file content, possibly wrapped across lines
    pub content: String,
}

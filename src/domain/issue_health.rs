//! Issue health aggregate

use serde::{Deserialize, Serialize};

/// Open-issue health counters
///
/// Only open issues contribute; closed issues never affect any counter.
/// Invariant: `stale_issues <= open_issues` and `bug_issues <= open_issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueHealth {
    /// Number of currently open issues
    pub open_issues: u32,
    /// Open issues with no update in the last 90 days
    pub stale_issues: u32,
    /// Open issues carrying a "bug" label
    pub bug_issues: u32,
}

impl IssueHealth {
    /// Creates a new issue health record
    pub fn new(open_issues: u32, stale_issues: u32, bug_issues: u32) -> Self {
        Self {
            open_issues,
            stale_issues,
            bug_issues,
        }
    }

    /// The identity value produced for an empty issue list
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }
}

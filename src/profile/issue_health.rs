//! Issue health aggregation
//!
//! Reduces the issue list into open, stale, and bug-labeled counters.
//! Closed issues never affect any counter.

use crate::domain::IssueHealth;
use crate::github::IssueRecord;
use crate::profile::parse_timestamp;
use chrono::{Duration, NaiveDateTime};

/// Days without an update after which an open issue counts as stale
const STALE_WINDOW_DAYS: i64 = 90;

/// Compute issue health counters from the issue list
///
/// An open issue is stale when its last update is older than 90 days
/// before `now`, and bug-labeled when any label name contains "bug"
/// case-insensitively. Label checking stops at the first match so an
/// issue is counted once no matter how many labels match.
pub fn issue_health(issues: &[IssueRecord], now: NaiveDateTime) -> IssueHealth {
    let stale_cutoff = now - Duration::days(STALE_WINDOW_DAYS);
    let mut open_issues = 0;
    let mut stale_issues = 0;
    let mut bug_issues = 0;

    for issue in issues {
        if !issue.is_open() {
            continue;
        }
        open_issues += 1;

        if let Some(updated_at) = parse_timestamp(&issue.updated_at) {
            if updated_at < stale_cutoff {
                stale_issues += 1;
            }
        }

        if issue
            .labels
            .iter()
            .any(|label| label.name.to_lowercase().contains("bug"))
        {
            bug_issues += 1;
        }
    }

    IssueHealth::new(open_issues, stale_issues, bug_issues)
}

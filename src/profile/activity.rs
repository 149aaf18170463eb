//! Activity trend aggregation
//!
//! Reduces the weekly commit-count histogram and the issue list into
//! average commit velocity plus 30-day issue inflow/outflow counts.

use crate::domain::ActivityTrends;
use crate::github::{CommitWeek, IssueRecord};
use crate::profile::{parse_timestamp, round2};
use chrono::{Duration, NaiveDateTime};

/// Number of weeks in the commit-activity histogram
const WEEKS_PER_YEAR: f64 = 52.0;

/// Length of the trailing issue-flow window, in days
const ISSUE_WINDOW_DAYS: i64 = 30;

/// Compute activity trends from commit and issue data
///
/// The velocity divisor is fixed at 52 regardless of how many weeks of
/// histogram data were actually supplied: the metric is "commits per
/// week over the trailing year" even for short histories. An empty
/// histogram yields an average of 0. Issues with unparseable timestamps
/// are skipped rather than counted.
pub fn activity_trends(
    commit_activity: &[CommitWeek],
    issues: &[IssueRecord],
    now: NaiveDateTime,
) -> ActivityTrends {
    let total_commits: u64 = commit_activity.iter().map(|week| week.total).sum();
    let avg_commits = if commit_activity.is_empty() {
        0.0
    } else {
        total_commits as f64 / WEEKS_PER_YEAR
    };

    let window_start = now - Duration::days(ISSUE_WINDOW_DAYS);
    let mut new_issues = 0;
    let mut closed_issues = 0;

    for issue in issues {
        if let Some(created_at) = parse_timestamp(&issue.created_at) {
            if created_at > window_start {
                new_issues += 1;
            }
        }

        if let Some(closed_at) = issue.closed_at.as_deref().and_then(parse_timestamp) {
            if closed_at > window_start {
                closed_issues += 1;
            }
        }
    }

    ActivityTrends::new(round2(avg_commits), new_issues, closed_issues)
}

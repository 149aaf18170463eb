//! Composite health scoring
//!
//! A deterministic weighted-penalty function over repository metadata
//! and the activity/issue aggregates. Starts from 100 and applies every
//! penalty independently; an earlier penalty never short-circuits a
//! later one.

use crate::domain::{ActivityTrends, IssueHealth};
use crate::github::RepoDetails;
use crate::profile::{parse_timestamp, round2};
use chrono::{Duration, NaiveDateTime};

/// Days since the last push before the repository counts as dormant
const DORMANT_WINDOW_DAYS: i64 = 90;

/// Star count below which the popularity penalty applies
const POPULARITY_THRESHOLD: u64 = 100;

/// Compute the composite 0-100 health score
///
/// Penalty schedule:
/// - last push missing, unparseable, or older than 90 days: -10
/// - average commit velocity below 1/week: -20; below 5/week: -10
/// - proportional stale-issue penalty, up to -20
/// - proportional bug-issue penalty, up to -20
/// - fewer than 100 stars: -10
/// - no license: -10
/// - no description: -10
///
/// Both proportional penalties are skipped entirely when there are no
/// open issues. The result is clamped to a 0.0 floor and rounded to two
/// decimals; no ceiling clamp is applied.
pub fn health_score(
    details: &RepoDetails,
    activity: &ActivityTrends,
    issues: &IssueHealth,
    now: NaiveDateTime,
) -> f64 {
    let mut score = 100.0;

    let dormant_cutoff = now - Duration::days(DORMANT_WINDOW_DAYS);
    match details.pushed_at.as_deref().and_then(parse_timestamp) {
        Some(last_push) if last_push >= dormant_cutoff => {}
        _ => score -= 10.0,
    }

    if activity.commits_per_week_avg < 1.0 {
        score -= 20.0;
    } else if activity.commits_per_week_avg < 5.0 {
        score -= 10.0;
    }

    if issues.open_issues > 0 {
        let open = f64::from(issues.open_issues);
        score -= (f64::from(issues.stale_issues) / open) * 20.0;
        score -= (f64::from(issues.bug_issues) / open) * 20.0;
    }

    if details.stargazers_count < POPULARITY_THRESHOLD {
        score -= 10.0;
    }

    if details.license.is_none() {
        score -= 10.0;
    }

    if details.description.as_deref().unwrap_or("").is_empty() {
        score -= 10.0;
    }

    round2(score.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::License;

    fn anchor() -> NaiveDateTime {
        "2026-08-01T12:00:00".parse().unwrap()
    }

    fn healthy_details() -> RepoDetails {
        RepoDetails {
            full_name: "psf/requests".to_string(),
            html_url: "https://github.com/psf/requests".to_string(),
            description: Some("HTTP for Humans".to_string()),
            stargazers_count: 49000,
            forks_count: 9000,
            license: Some(License {
                name: "Apache License 2.0".to_string(),
            }),
            pushed_at: Some("2026-07-30T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_perfect_score() {
        let activity = ActivityTrends::new(10.0, 5, 5);
        let issues = IssueHealth::zero();
        assert_eq!(
            health_score(&healthy_details(), &activity, &issues, anchor()),
            100.0
        );
    }

    #[test]
    fn test_determinism() {
        let activity = ActivityTrends::new(3.0, 2, 1);
        let issues = IssueHealth::new(10, 3, 2);
        let first = health_score(&healthy_details(), &activity, &issues, anchor());
        let second = health_score(&healthy_details(), &activity, &issues, anchor());
        assert_eq!(first, second);
    }

    #[test]
    fn test_dormant_repo_penalized() {
        let mut details = healthy_details();
        details.pushed_at = Some("2026-01-01T00:00:00Z".to_string());
        let activity = ActivityTrends::new(10.0, 0, 0);
        let score = health_score(&details, &activity, &IssueHealth::zero(), anchor());
        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_missing_pushed_at_penalized() {
        let mut details = healthy_details();
        details.pushed_at = None;
        let activity = ActivityTrends::new(10.0, 0, 0);
        let score = health_score(&details, &activity, &IssueHealth::zero(), anchor());
        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_unparseable_pushed_at_penalized() {
        let mut details = healthy_details();
        details.pushed_at = Some("soon".to_string());
        let activity = ActivityTrends::new(10.0, 0, 0);
        let score = health_score(&details, &activity, &IssueHealth::zero(), anchor());
        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_low_velocity_tiers() {
        let issues = IssueHealth::zero();

        let idle = ActivityTrends::new(0.5, 0, 0);
        assert_eq!(health_score(&healthy_details(), &idle, &issues, anchor()), 80.0);

        let slow = ActivityTrends::new(3.0, 0, 0);
        assert_eq!(health_score(&healthy_details(), &slow, &issues, anchor()), 90.0);

        // Exactly 1 lands in the middle tier, exactly 5 in neither.
        let boundary_one = ActivityTrends::new(1.0, 0, 0);
        assert_eq!(
            health_score(&healthy_details(), &boundary_one, &issues, anchor()),
            90.0
        );
        let boundary_five = ActivityTrends::new(5.0, 0, 0);
        assert_eq!(
            health_score(&healthy_details(), &boundary_five, &issues, anchor()),
            100.0
        );
    }

    #[test]
    fn test_proportional_issue_penalties() {
        let activity = ActivityTrends::new(10.0, 0, 0);
        // Half stale, a quarter bugs: -10 and -5.
        let issues = IssueHealth::new(20, 10, 5);
        let score = health_score(&healthy_details(), &activity, &issues, anchor());
        assert_eq!(score, 85.0);
    }

    #[test]
    fn test_zero_open_issues_skips_proportional_penalties() {
        let activity = ActivityTrends::new(10.0, 0, 0);
        let issues = IssueHealth::zero();
        // No division error, no penalty.
        let score = health_score(&healthy_details(), &activity, &issues, anchor());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_popularity_license_description_penalties() {
        let mut details = healthy_details();
        details.stargazers_count = 12;
        details.license = None;
        details.description = None;
        let activity = ActivityTrends::new(10.0, 0, 0);
        let score = health_score(&details, &activity, &IssueHealth::zero(), anchor());
        assert_eq!(score, 70.0);
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let mut details = healthy_details();
        details.description = Some(String::new());
        let activity = ActivityTrends::new(10.0, 0, 0);
        let score = health_score(&details, &activity, &IssueHealth::zero(), anchor());
        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_floor_clamped_at_zero() {
        let details = RepoDetails {
            full_name: "a/b".to_string(),
            html_url: "https://github.com/a/b".to_string(),
            description: None,
            stargazers_count: 0,
            forks_count: 0,
            license: None,
            pushed_at: None,
        };
        let activity = ActivityTrends::new(0.0, 0, 0);
        // All penalties maximal: the raw score lands exactly on the floor.
        let issues = IssueHealth::new(10, 10, 10);
        let score = health_score(&details, &activity, &issues, anchor());
        assert_eq!(score, 0.0);

        // Even with ratios above 1 the result never goes negative.
        let out_of_range = IssueHealth::new(10, 20, 20);
        let score = health_score(&details, &activity, &out_of_range, anchor());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_penalties_are_additive() {
        let mut details = healthy_details();
        details.pushed_at = None;
        details.license = None;
        let activity = ActivityTrends::new(0.0, 0, 0);
        // -10 (push) -20 (velocity) -10 (license) = 60.
        let score = health_score(&details, &activity, &IssueHealth::zero(), anchor());
        assert_eq!(score, 60.0);
    }
}

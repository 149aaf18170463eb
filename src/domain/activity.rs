//! Activity trend aggregate

use serde::{Deserialize, Serialize};

/// Commit and issue activity over trailing windows
///
/// `commits_per_week_avg` covers the trailing year; the issue counters
/// cover a trailing 30-day window anchored to the moment of analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTrends {
    /// Average commits per week over the last 52 weeks, rounded to 2 decimals
    pub commits_per_week_avg: f64,
    /// Issues opened in the last 30 days
    pub new_issues: u32,
    /// Issues closed in the last 30 days
    pub closed_issues: u32,
}

impl ActivityTrends {
    /// Creates a new activity trend record
    pub fn new(commits_per_week_avg: f64, new_issues: u32, closed_issues: u32) -> Self {
        Self {
            commits_per_week_avg,
            new_issues,
            closed_issues,
        }
    }

    /// The identity value produced for fully empty inputs
    pub fn zero() -> Self {
        Self::new(0.0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let trends = ActivityTrends::zero();
        assert_eq!(trends.commits_per_week_avg, 0.0);
        assert_eq!(trends.new_issues, 0);
        assert_eq!(trends.closed_issues, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let trends = ActivityTrends::new(5.21, 12, 8);
        let json = serde_json::to_string(&trends).unwrap();
        let parsed: ActivityTrends = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trends);
    }
}

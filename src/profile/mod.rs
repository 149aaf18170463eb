//! The profiling core
//!
//! Pure, synchronous reductions over already-fetched repository data:
//! - Activity trends (commit velocity, 30-day issue flow)
//! - Issue health (open/stale/bug counters)
//! - Top contributor projection
//! - Composite health scoring
//!
//! Every time-window calculation takes an explicit `now` anchor instead
//! of reading the system clock, which keeps the functions deterministic
//! and directly testable against golden values.

mod activity;
mod contributors;
mod issue_health;
mod score;

pub use activity::activity_trends;
pub use contributors::{top_contributors, TOP_CONTRIBUTOR_LIMIT};
pub use issue_health::issue_health;
pub use score::health_score;

use chrono::NaiveDateTime;

/// Parse an ISO-8601 timestamp with an optional trailing UTC "Z"
///
/// The designator is stripped before parsing; the result is naive UTC
/// with no timezone conversion. Returns None for malformed input.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    value.trim_end_matches('Z').parse::<NaiveDateTime>().ok()
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

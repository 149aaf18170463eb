//! Top contributor projection

use crate::domain::Contributor;
use crate::github::ContributorRecord;

/// Maximum number of contributors included in the report
pub const TOP_CONTRIBUTOR_LIMIT: usize = 5;

/// Project raw contributor records into the capped top-N list
///
/// The input is already ordered by contribution count descending (the
/// contributors endpoint guarantees this), so the projection keeps input
/// order and performs no sorting.
pub fn top_contributors(records: &[ContributorRecord]) -> Vec<Contributor> {
    records
        .iter()
        .take(TOP_CONTRIBUTOR_LIMIT)
        .map(|record| Contributor::new(&record.login, record.contributions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(login: &str, contributions: u64) -> ContributorRecord {
        ContributorRecord {
            login: login.to_string(),
            contributions,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(top_contributors(&[]).is_empty());
    }

    #[test]
    fn test_caps_at_five_in_input_order() {
        let records: Vec<ContributorRecord> = (0..8)
            .map(|i| record(&format!("user{}", i), 100 - i))
            .collect();

        let top = top_contributors(&records);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].username, "user0");
        assert_eq!(top[4].username, "user4");
    }

    #[test]
    fn test_fewer_than_five_kept_as_is() {
        let records = vec![record("alice", 10), record("bob", 5)];
        let top = top_contributors(&records);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], Contributor::new("alice", 10));
        assert_eq!(top[1], Contributor::new("bob", 5));
    }
}

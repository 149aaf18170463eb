//! Contributor record

use serde::{Deserialize, Serialize};

/// A repository contributor and their commit count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// GitHub login name
    pub username: String,
    /// Number of commits contributed
    pub commits: u64,
}

impl Contributor {
    /// Creates a new contributor record
    pub fn new(username: impl Into<String>, commits: u64) -> Self {
        Self {
            username: username.into(),
            commits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributor_new() {
        let c = Contributor::new("octocat", 1309);
        assert_eq!(c.username, "octocat");
        assert_eq!(c.commits, 1309);
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Contributor::new("octocat", 42);
        let json = serde_json::to_string(&c).unwrap();
        let parsed: Contributor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }
}

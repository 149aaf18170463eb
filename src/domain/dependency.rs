//! Dependency information structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single package dependency declared in a manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Version string as written in the manifest, or "latest" when the
    /// manifest line carries no version constraint
    pub version: String,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Creates a dependency with no version constraint
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self::new(name, "latest")
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// All dependencies parsed from one recognized manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Manifest filename (e.g. "requirements.txt")
    pub file: String,
    /// Parsed dependencies, in manifest order. Never empty: manifests
    /// that parse to zero dependencies produce no report at all.
    pub dependencies: Vec<Dependency>,
}

impl DependencyReport {
    /// Creates a new dependency report
    pub fn new(file: impl Into<String>, dependencies: Vec<Dependency>) -> Self {
        Self {
            file: file.into(),
            dependencies,
        }
    }

    /// Returns the number of dependencies in this report
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns true if the report holds no dependencies
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_new() {
        let dep = Dependency::new("flask", "2.0.1");
        assert_eq!(dep.name, "flask");
        assert_eq!(dep.version, "2.0.1");
    }

    #[test]
    fn test_dependency_unversioned() {
        let dep = Dependency::unversioned("requests");
        assert_eq!(dep.version, "latest");
    }

    #[test]
    fn test_dependency_display() {
        let dep = Dependency::new("lodash", "^4.17.21");
        assert_eq!(format!("{}", dep), "lodash@^4.17.21");
    }

    #[test]
    fn test_dependency_equality() {
        assert_eq!(Dependency::new("a", "1.0"), Dependency::new("a", "1.0"));
        assert_ne!(Dependency::new("a", "1.0"), Dependency::new("a", "2.0"));
    }

    #[test]
    fn test_report_new() {
        let report = DependencyReport::new(
            "requirements.txt",
            vec![Dependency::new("flask", "2.0.1")],
        );
        assert_eq!(report.file, "requirements.txt");
        assert_eq!(report.len(), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let report = DependencyReport::new(
            "package.json",
            vec![Dependency::new("react", "^18.2.0")],
        );
        let json = serde_json::to_string(&report).unwrap();
        let parsed: DependencyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}

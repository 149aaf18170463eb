//! requirements.txt parser for Python projects
//!
//! Handles:
//! - `package==1.2.3` style pinned lines
//! - comparison operators: `==`, `~=`, `>=`, `<=`, `=`, `>`, `<`
//! - bare package names (recorded with version "latest")
//! - comments and blank lines (skipped)
//!
//! Lines matching none of the above are silently dropped; a broken line
//! never aborts parsing of the rest of the file.

use crate::domain::Dependency;
use crate::manifest::ManifestParser;
use regex::Regex;
use std::sync::LazyLock;

// Leading name token, optionally followed by a one- or two-character
// comparison operator and a version token.
static REQUIREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w\-]+)(?:[=~><]{1,2}([\w.]+))?").unwrap());

/// Parser for requirements.txt files
pub struct RequirementsTxtParser;

impl ManifestParser for RequirementsTxtParser {
    fn parse(&self, content: &str) -> Vec<Dependency> {
        let mut dependencies = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = REQUIREMENT_RE.captures(line) {
                let name = &caps[1];
                let dep = match caps.get(2) {
                    Some(version) => Dependency::new(name, version.as_str()),
                    None => Dependency::unversioned(name),
                };
                dependencies.push(dep);
            }
        }

        dependencies
    }

    fn filename(&self) -> &'static str {
        "requirements.txt"
    }
}

//! package.json parser for Node.js projects
//!
//! Handles:
//! - dependencies
//! - devDependencies (overriding regular entries on name collision)
//!
//! Version strings are taken verbatim from the manifest; a malformed
//! document yields an empty dependency list rather than an error.

use crate::domain::Dependency;
use crate::manifest::ManifestParser;
use serde_json::{Map, Value};

/// Parser for package.json files
pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    fn parse(&self, content: &str) -> Vec<Dependency> {
        let json: Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };

        let mut merged: Map<String, Value> = Map::new();
        if let Some(deps) = json.get("dependencies").and_then(|v| v.as_object()) {
            merged.extend(deps.clone());
        }
        // Later merge wins: a devDependencies entry overwrites a
        // dependencies entry with the same name.
        if let Some(deps) = json.get("devDependencies").and_then(|v| v.as_object()) {
            merged.extend(deps.clone());
        }

        merged
            .iter()
            .filter_map(|(name, version)| {
                version
                    .as_str()
                    .map(|version| Dependency::new(name, version))
            })
            .collect()
    }

    fn filename(&self) -> &'static str {
        "package.json"
    }
}

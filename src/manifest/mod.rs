//! Dependency manifest parsing
//!
//! This module provides functionality to:
//! - Parse dependencies from recognized manifest formats
//! - Assemble per-file dependency reports from fetched file contents
//!
//! Parsing is deliberately lenient: malformed documents and unrecognized
//! lines contribute no dependencies instead of raising errors, so a
//! broken manifest degrades the report rather than aborting the run.

mod package_json;
mod requirements_txt;

pub use package_json::PackageJsonParser;
pub use requirements_txt::RequirementsTxtParser;

use crate::domain::{Dependency, DependencyReport};
use std::collections::HashMap;

/// Trait for parsing manifest file contents
pub trait ManifestParser {
    /// Parse dependencies from manifest text. Unparseable input yields an
    /// empty list, never an error.
    fn parse(&self, content: &str) -> Vec<Dependency>;

    /// The manifest filename this parser recognizes
    fn filename(&self) -> &'static str;
}

/// Get a manifest parser for the given filename, if the format is recognized
pub fn get_parser(filename: &str) -> Option<Box<dyn ManifestParser>> {
    match filename {
        "requirements.txt" => Some(Box::new(RequirementsTxtParser)),
        "package.json" => Some(Box::new(PackageJsonParser)),
        _ => None,
    }
}

/// Manifest filenames recognized by the profiler, in report precedence order
pub const MANIFEST_FILES: [&str; 2] = ["requirements.txt", "package.json"];

/// Assemble dependency reports from fetched file contents
///
/// `file_contents` maps manifest filename to raw text. Filenames other
/// than the recognized two are ignored; manifests that parse to zero
/// dependencies produce no report.
pub fn analyze_dependencies(file_contents: &HashMap<String, String>) -> Vec<DependencyReport> {
    let mut reports = Vec::new();

    for filename in MANIFEST_FILES {
        let Some(content) = file_contents.get(filename) else {
            continue;
        };
        // get_parser always succeeds for entries of MANIFEST_FILES
        let Some(parser) = get_parser(filename) else {
            continue;
        };
        let dependencies = parser.parse(content);
        if !dependencies.is_empty() {
            reports.push(DependencyReport::new(filename, dependencies));
        }
    }

    reports
}

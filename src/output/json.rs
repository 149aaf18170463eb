//! JSON output formatter for machine processing
//!
//! Serializes the full repository report; fetch degradations are
//! appended as an `errors` array in verbose mode.

use crate::domain::RepoReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// The repository report, flattened into the top level
    #[serde(flatten)]
    report: &'a RepoReport,
    /// Degraded fetches (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let errors = if self.verbosity == Verbosity::Verbose {
            result.errors.iter().map(|e| e.to_string()).collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            report: &result.report,
            errors,
        };

        let json = if self.verbosity == Verbosity::Quiet {
            serde_json::to_string(&output)?
        } else {
            serde_json::to_string_pretty(&output)?
        };

        writeln!(writer, "{}", json)
    }
}

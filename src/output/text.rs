//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Human-readable report display with colors
//! - Health score colored by band
//! - Dependency listing per manifest file
//! - Narrative summary section

use crate::domain::RepoReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Format the health score with a band color
    fn colored_score(score: f64) -> String {
        let label = format!("{:.2}", score);
        if score >= 80.0 {
            label.green().bold().to_string()
        } else if score >= 50.0 {
            label.yellow().bold().to_string()
        } else {
            label.red().bold().to_string()
        }
    }

    fn write_header(&self, report: &RepoReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} {}",
            report.repo_name.bold(),
            report.repo_url.dimmed()
        )?;
        if let Some(description) = &report.description {
            writeln!(writer, "  {}", description)?;
        }
        writeln!(
            writer,
            "  Health score: {} / 100",
            Self::colored_score(report.health_score)
        )?;
        writeln!(
            writer,
            "  {} stars · {} forks · license: {} · last push: {}",
            report.stars,
            report.forks,
            report.license.as_deref().unwrap_or("none"),
            report.last_updated.as_deref().unwrap_or("unknown"),
        )
    }

    fn write_activity(&self, report: &RepoReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", "Activity".bold())?;
        writeln!(
            writer,
            "  commits/week (avg over last year): {}",
            report.activity.commits_per_week_avg
        )?;
        writeln!(
            writer,
            "  issues last 30d: {} opened, {} closed",
            report.activity.new_issues, report.activity.closed_issues
        )
    }

    fn write_issues(&self, report: &RepoReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", "Issues".bold())?;
        writeln!(
            writer,
            "  open: {} · stale (>90d): {} · bug-labeled: {}",
            report.issues.open_issues, report.issues.stale_issues, report.issues.bug_issues
        )
    }

    fn write_contributors(
        &self,
        report: &RepoReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if report.top_contributors.is_empty() {
            return Ok(());
        }
        writeln!(writer)?;
        writeln!(writer, "{}", "Top contributors".bold())?;
        for (rank, contributor) in report.top_contributors.iter().enumerate() {
            writeln!(
                writer,
                "  {}. {} ({} commits)",
                rank + 1,
                contributor.username,
                contributor.commits
            )?;
        }
        Ok(())
    }

    fn write_dependencies(
        &self,
        report: &RepoReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", "Dependencies".bold())?;
        if report.dependencies.is_empty() {
            writeln!(writer, "  no recognized manifest files")?;
            return Ok(());
        }
        for manifest in &report.dependencies {
            writeln!(
                writer,
                "  {} ({} dependencies)",
                manifest.file.cyan(),
                manifest.len()
            )?;
            if self.verbosity == Verbosity::Verbose {
                for dependency in &manifest.dependencies {
                    writeln!(writer, "    {}", dependency)?;
                }
            }
        }
        Ok(())
    }

    fn write_summary(&self, report: &RepoReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", "Summary".bold())?;
        for line in report.summary.lines() {
            writeln!(writer, "  {}", line)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let report = &result.report;

        if self.verbosity == Verbosity::Quiet {
            // One line: name and score.
            return writeln!(writer, "{} {:.2}", report.repo_name, report.health_score);
        }

        self.write_header(report, writer)?;
        self.write_activity(report, writer)?;
        self.write_issues(report, writer)?;
        self.write_contributors(report, writer)?;
        self.write_dependencies(report, writer)?;
        self.write_summary(report, writer)?;

        if self.verbosity == Verbosity::Verbose && !result.errors.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", "Degraded data".yellow().bold())?;
            for error in &result.errors {
                writeln!(writer, "  {}", error)?;
            }
        }

        Ok(())
    }
}

//! Analysis orchestrator for coordinating the profiling workflow
//!
//! This module provides:
//! - Workflow coordination: fetch → profile → score → summarize → report
//! - Parallel fan-out of the independent GitHub fetches
//! - Degradation with partial continuation: only repository metadata is
//!   essential, every other failed fetch becomes an empty collection and
//!   a recorded error

use crate::cli::CliArgs;
use crate::domain::RepoReport;
use crate::error::AppError;
use crate::github::{RepoDataSource, RootEntry};
use crate::manifest::{analyze_dependencies, MANIFEST_FILES};
use crate::narrative::{NarrativeContext, NarrativeGenerator, FALLBACK_SUMMARY};
use crate::profile::{activity_trends, health_score, issue_health, top_contributors};
use crate::progress::Progress;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Orchestrator for one analysis run
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Repository data source
    source: Arc<dyn RepoDataSource>,
    /// Narrative generator, if one is configured
    narrator: Option<Box<dyn NarrativeGenerator>>,
}

/// Result of running the orchestrator
pub struct OrchestratorResult {
    /// The assembled repository report
    pub report: RepoReport,
    /// Non-fatal degradations encountered during fetching
    pub errors: Vec<OrchestratorError>,
}

/// Non-fatal errors that can occur during orchestration
#[derive(Debug)]
pub enum OrchestratorError {
    /// A non-essential fetch failed and was degraded to an empty collection
    FetchDegraded { resource: String, message: String },
}

impl std::fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorError::FetchDegraded { resource, message } => {
                write!(f, "Degraded {}: {}", resource, message)
            }
        }
    }
}

impl std::error::Error for OrchestratorError {}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(
        args: CliArgs,
        source: Arc<dyn RepoDataSource>,
        narrator: Option<Box<dyn NarrativeGenerator>>,
    ) -> Self {
        Self {
            args,
            source,
            narrator,
        }
    }

    /// Run the analysis workflow
    pub async fn run(&self) -> Result<OrchestratorResult, AppError> {
        self.run_with_progress(!self.args.quiet).await
    }

    /// Run the analysis workflow with optional progress display
    pub async fn run_with_progress(
        &self,
        show_progress: bool,
    ) -> Result<OrchestratorResult, AppError> {
        let repo = self.args.repo_name()?;
        let mut progress = Progress::new(show_progress);
        let mut errors = Vec::new();

        // Step 1: Fetch the five independent data sets in parallel.
        // Repository metadata is fatal on failure; everything else
        // degrades to an empty collection.
        progress.spinner(&format!("Fetching data for {}...", repo));
        let (details, contributors, issues, commit_activity, root_entries) = tokio::join!(
            self.source.fetch_repo_details(&repo),
            self.source.fetch_contributors(&repo),
            self.source.fetch_issues(&repo),
            self.source.fetch_commit_activity(&repo),
            self.source.fetch_root_entries(&repo),
        );

        let details = match details {
            Ok(details) => details,
            Err(e) => {
                progress.finish_and_clear();
                return Err(e.into());
            }
        };

        let contributors = degrade(contributors, "contributors", &mut errors);
        let issues = degrade(issues, "issues", &mut errors);
        let commit_activity = degrade(commit_activity, "commit activity", &mut errors);
        let root_entries = degrade(root_entries, "root listing", &mut errors);
        progress.finish_and_clear();

        // Step 2: Fetch the contents of recognized manifest files.
        progress.spinner("Fetching dependency manifests...");
        let file_contents = self
            .fetch_manifest_contents(&repo, &root_entries, &mut errors)
            .await;
        progress.finish_and_clear();

        // Step 3: Run the profiling core over the materialized data.
        progress.spinner("Profiling...");
        let now = Utc::now().naive_utc();
        let activity = activity_trends(&commit_activity, &issues, now);
        let issue_counters = issue_health(&issues, now);
        let top = top_contributors(&contributors);
        let score = health_score(&details, &activity, &issue_counters, now);
        let dependencies = analyze_dependencies(&file_contents);
        progress.finish_and_clear();

        // Step 4: Generate the narrative summary.
        let context = NarrativeContext {
            repo_name: details.full_name.clone(),
            health_score: score,
            description: details.description.clone(),
            stars: details.stargazers_count,
            last_updated: details.pushed_at.clone(),
            license: details.license_name().map(String::from),
            activity: activity.clone(),
            issues: issue_counters.clone(),
            contributor_count: top.len(),
        };

        let summary = match &self.narrator {
            Some(narrator) => {
                progress.spinner("Generating summary...");
                let summary = narrator.generate(&context).await;
                progress.finish_and_clear();
                summary
            }
            None => FALLBACK_SUMMARY.to_string(),
        };

        // Step 5: Assemble the final report.
        let report = RepoReport {
            repo_name: details.full_name.clone(),
            repo_url: details.html_url.clone(),
            description: details.description.clone(),
            stars: details.stargazers_count,
            forks: details.forks_count,
            license: details.license_name().map(String::from),
            last_updated: details.pushed_at.clone(),
            activity,
            top_contributors: top,
            issues: issue_counters,
            health_score: score,
            dependencies,
            summary,
        };

        Ok(OrchestratorResult { report, errors })
    }

    /// Fetch contents for every recognized manifest in the root listing
    async fn fetch_manifest_contents(
        &self,
        repo: &str,
        root_entries: &[RootEntry],
        errors: &mut Vec<OrchestratorError>,
    ) -> HashMap<String, String> {
        let mut tasks: JoinSet<(String, Result<String, crate::error::GithubError>)> =
            JoinSet::new();

        for entry in root_entries {
            if !MANIFEST_FILES.contains(&entry.name.as_str()) {
                continue;
            }
            let source = Arc::clone(&self.source);
            let repo = repo.to_string();
            let name = entry.name.clone();
            let path = entry.path.clone();
            tasks.spawn(async move {
                let content = source.fetch_file_content(&repo, &path).await;
                (name, content)
            });
        }

        let mut file_contents = HashMap::new();
        while let Some(joined) = tasks.join_next().await {
            let Ok((name, content)) = joined else {
                continue;
            };
            match content {
                Ok(content) => {
                    file_contents.insert(name, content);
                }
                Err(e) => errors.push(OrchestratorError::FetchDegraded {
                    resource: format!("manifest {}", name),
                    message: e.to_string(),
                }),
            }
        }

        file_contents
    }
}

/// Unwrap a non-essential fetch result, recording a degradation on error
fn degrade<T>(
    result: Result<Vec<T>, crate::error::GithubError>,
    resource: &str,
    errors: &mut Vec<OrchestratorError>,
) -> Vec<T> {
    match result {
        Ok(values) => values,
        Err(e) => {
            errors.push(OrchestratorError::FetchDegraded {
                resource: resource.to_string(),
                message: e.to_string(),
            });
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GithubError;

    #[test]
    fn test_degrade_keeps_ok_values() {
        let mut errors = Vec::new();
        let values = degrade(Ok(vec![1, 2, 3]), "issues", &mut errors);
        assert_eq!(values, vec![1, 2, 3]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_degrade_records_error_and_yields_empty() {
        let mut errors = Vec::new();
        let values: Vec<u32> = degrade(
            Err(GithubError::timeout("issues")),
            "issues",
            &mut errors,
        );
        assert!(values.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("issues"));
    }

    #[test]
    fn test_orchestrator_error_display() {
        let err = OrchestratorError::FetchDegraded {
            resource: "contributors".to_string(),
            message: "HTTP 500".to_string(),
        };
        assert!(err.to_string().contains("Degraded contributors"));
        assert!(err.to_string().contains("HTTP 500"));
    }
}

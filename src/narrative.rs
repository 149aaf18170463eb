//! AI narrative summary generation
//!
//! Builds a prompt from the profiling results and asks the Gemini API
//! for a free-text summary. The report never depends on this text beyond
//! embedding it verbatim: any failure, including a missing API key,
//! yields the fixed fallback string instead of an error.

use crate::domain::{ActivityTrends, IssueHealth};
use crate::error::GithubError;
use crate::github::HttpClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Gemini REST API base URL
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for summary generation
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Text embedded in the report when no summary could be generated
pub const FALLBACK_SUMMARY: &str = "Failed to generate AI summary. Try again!";

/// Flat context handed to the narrative generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeContext {
    /// Full repository name
    pub repo_name: String,
    /// Composite health score
    pub health_score: f64,
    /// Repository description, if any
    pub description: Option<String>,
    /// Star count
    pub stars: u64,
    /// Last-push timestamp as reported by GitHub
    pub last_updated: Option<String>,
    /// License name, if any
    pub license: Option<String>,
    /// Activity trend aggregate
    pub activity: ActivityTrends,
    /// Issue health aggregate
    pub issues: IssueHealth,
    /// Number of top contributors included in the report
    pub contributor_count: usize,
}

/// Generator of the free-text repository summary
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generate a summary, falling back to [`FALLBACK_SUMMARY`] on failure
    async fn generate(&self, context: &NarrativeContext) -> String;
}

/// Narrative generator backed by the Gemini API
pub struct GeminiGenerator {
    http: HttpClient,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiGenerator {
    /// Create a generator with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, GithubError> {
        Ok(Self {
            http: HttpClient::new()?,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Create a generator from `GEMINI_API_KEY`, if it is set
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("GEMINI_API_KEY").ok()?;
        if key.trim().is_empty() {
            return None;
        }
        Self::new(key).ok()
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn request_summary(&self, prompt: String) -> Result<String, GithubError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response: GenerateResponse = self.http.post_json(&url, &body, "summary").await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| GithubError::invalid_response("summary", "no candidates returned"))
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiGenerator {
    async fn generate(&self, context: &NarrativeContext) -> String {
        match self.request_summary(build_prompt(context)).await {
            Ok(text) => text,
            Err(_) => FALLBACK_SUMMARY.to_string(),
        }
    }
}

/// Build the summary prompt from the profiling results
fn build_prompt(context: &NarrativeContext) -> String {
    format!(
        "Your objective is to provide a high-level summary of a GitHub repository.\n\
         Analyze the following data:\n\n\
         Repo Name: {repo_name}\n\
         Health Score: {health_score}\n\
         Description: {description}\n\
         Stars: {stars}\n\
         Last Updated: {last_updated}\n\
         License: {license}\n\
         Commits per week (avg): {commits_per_week_avg}\n\
         New issues (last 30d): {new_issues}\n\
         Closed issues (last 30d): {closed_issues}\n\
         Total open issues: {open_issues}\n\
         Stale issues (>90d): {stale_issues}\n\
         Bug-labeled issues: {bug_issues}\n\
         Contributors count: {contributor_count}\n\n\
         Provide a summary that contains the following:\n\
         1. Overall summary and description of the project\n\
         2. Overall health and activity levels\n\
         3. Any major issues or flags\n\
         4. Is it good overall, or bad? Rating on a scale from 1-10 with reasoning\n\n\
         Start the summary directly, without any preamble.\n",
        repo_name = context.repo_name,
        health_score = context.health_score,
        description = context.description.as_deref().unwrap_or("None"),
        stars = context.stars,
        last_updated = context.last_updated.as_deref().unwrap_or("unknown"),
        license = context.license.as_deref().unwrap_or("None"),
        commits_per_week_avg = context.activity.commits_per_week_avg,
        new_issues = context.activity.new_issues,
        closed_issues = context.activity.closed_issues,
        open_issues = context.issues.open_issues,
        stale_issues = context.issues.stale_issues,
        bug_issues = context.issues.bug_issues,
        contributor_count = context.contributor_count,
    )
}

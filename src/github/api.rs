//! GitHub REST API data source
//!
//! Fetcher functions for everything one analysis run needs: repository
//! metadata, contributors, issues, the weekly commit histogram, the root
//! directory listing, and raw file contents. Repository metadata is the
//! only essential fetch; callers degrade the rest to empty collections
//! when a fetch fails.

use crate::error::GithubError;
use crate::github::client::HttpClient;
use crate::github::types::{
    CommitWeek, ContentRecord, ContributorRecord, IssueRecord, RepoDetails, RootEntry,
};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::time::Duration;

/// GitHub REST API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Delay before re-polling the commit statistics endpoint
const STATS_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Supplier of raw repository data for one analysis run
#[async_trait]
pub trait RepoDataSource: Send + Sync {
    /// Fetch repository metadata (stars, forks, description, license, ...)
    async fn fetch_repo_details(&self, repo: &str) -> Result<RepoDetails, GithubError>;

    /// Fetch contributors, ordered by contribution count descending
    async fn fetch_contributors(&self, repo: &str) -> Result<Vec<ContributorRecord>, GithubError>;

    /// Fetch open and closed issues
    async fn fetch_issues(&self, repo: &str) -> Result<Vec<IssueRecord>, GithubError>;

    /// Fetch the last year of weekly commit totals
    async fn fetch_commit_activity(&self, repo: &str) -> Result<Vec<CommitWeek>, GithubError>;

    /// Fetch the repository root directory listing
    async fn fetch_root_entries(&self, repo: &str) -> Result<Vec<RootEntry>, GithubError>;

    /// Fetch the decoded text content of a single file
    async fn fetch_file_content(&self, repo: &str, path: &str) -> Result<String, GithubError>;
}

/// GitHub API client
pub struct GithubClient {
    http: HttpClient,
}

impl GithubClient {
    /// Create a client authenticated with an installation token
    pub fn new(token: impl Into<String>) -> Result<Self, GithubError> {
        let http = HttpClient::new()?
            .with_token(token)
            .with_accept("application/vnd.github.v3+json");
        Ok(Self { http })
    }

    /// Create a client over an existing HTTP client (for testing)
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    fn repo_url(&self, repo: &str, suffix: &str) -> String {
        format!("{}/repos/{}{}", GITHUB_API_URL, repo, suffix)
    }
}

#[async_trait]
impl RepoDataSource for GithubClient {
    async fn fetch_repo_details(&self, repo: &str) -> Result<RepoDetails, GithubError> {
        let url = self.repo_url(repo, "");
        self.http.get_json(&url, repo, "repository").await
    }

    async fn fetch_contributors(&self, repo: &str) -> Result<Vec<ContributorRecord>, GithubError> {
        let url = self.repo_url(repo, "/contributors");
        self.http.get_json(&url, repo, "contributors").await
    }

    async fn fetch_issues(&self, repo: &str) -> Result<Vec<IssueRecord>, GithubError> {
        // state=all covers both open and closed issues
        let url = self.repo_url(repo, "/issues?state=all&per_page=100");
        self.http.get_json(&url, repo, "issues").await
    }

    async fn fetch_commit_activity(&self, repo: &str) -> Result<Vec<CommitWeek>, GithubError> {
        let url = self.repo_url(repo, "/stats/commit_activity");
        let resource = "commit activity";

        // The stats API answers 202 while GitHub is still computing the
        // histogram; poll once more, then settle for an empty result.
        let mut response = self.http.get_with_context(&url, repo, resource).await?;
        if response.status() == reqwest::StatusCode::ACCEPTED {
            tokio::time::sleep(STATS_RETRY_DELAY).await;
            response = self.http.get_with_context(&url, repo, resource).await?;
            if response.status() == reqwest::StatusCode::ACCEPTED {
                return Ok(Vec::new());
            }
        }

        response.json::<Vec<CommitWeek>>().await.map_err(|e| {
            GithubError::invalid_response(resource, format!("failed to parse JSON: {}", e))
        })
    }

    async fn fetch_root_entries(&self, repo: &str) -> Result<Vec<RootEntry>, GithubError> {
        let url = self.repo_url(repo, "/contents/");
        self.http.get_json(&url, repo, "root listing").await
    }

    async fn fetch_file_content(&self, repo: &str, path: &str) -> Result<String, GithubError> {
        let url = self.repo_url(repo, &format!("/contents/{}", path));
        let record: ContentRecord = self.http.get_json(&url, repo, "file content").await?;
        decode_content(&record)
    }
}

/// Decode a contents-API record into text
///
/// GitHub wraps base64 content across lines; the whitespace is stripped
/// before decoding. Non-base64 encodings yield an empty string.
fn decode_content(record: &ContentRecord) -> Result<String, GithubError> {
    if record.encoding != "base64" {
        return Ok(String::new());
    }

    let cleaned: String = record
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| GithubError::invalid_response("file content", e.to_string()))?;

    String::from_utf8(bytes)
        .map_err(|e| GithubError::invalid_response("file content", e.to_string()))
}

//! Application error types using thiserror
//!
//! Error hierarchy:
//! - GithubError: Issues with GitHub API communication
//! - ConfigError: Issues with CLI input and credential configuration
//!
//! The profiling core itself never produces errors: malformed or missing
//! data degrades to empty or zero-valued aggregates at the point of use.

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// GitHub API related errors
    #[error(transparent)]
    Github(#[from] GithubError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to GitHub API communication
#[derive(Error, Debug)]
pub enum GithubError {
    /// Repository not found (or not visible to the installation)
    #[error("repository '{repo}' not found on GitHub")]
    RepoNotFound { repo: String },

    /// Network request failed
    #[error("failed to fetch {resource} for '{repo}': {message}")]
    NetworkError {
        repo: String,
        resource: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid response body
    #[error("invalid response for {resource}: {message}")]
    InvalidResponse { resource: String, message: String },

    /// Timeout
    #[error("timeout while fetching {resource}")]
    Timeout { resource: String },

    /// App authentication failed
    #[error("GitHub App authentication failed: {message}")]
    AuthenticationFailed { message: String },
}

/// Errors related to configuration and CLI input
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The argument is not a GitHub repository URL
    #[error("invalid repository URL '{url}': expected 'https://github.com/owner/repo'")]
    InvalidRepoUrl { url: String },

    /// A required environment variable is not set
    #[error("missing credential: environment variable {variable} is not set")]
    MissingCredentials { variable: String },

    /// The configured private key could not be used
    #[error("invalid GitHub App private key: {message}")]
    InvalidPrivateKey { message: String },
}

impl GithubError {
    /// Creates a new RepoNotFound error
    pub fn repo_not_found(repo: impl Into<String>) -> Self {
        GithubError::RepoNotFound { repo: repo.into() }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repo: impl Into<String>,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        GithubError::NetworkError {
            repo: repo.into(),
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(resource: impl Into<String>, message: impl Into<String>) -> Self {
        GithubError::InvalidResponse {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(resource: impl Into<String>) -> Self {
        GithubError::Timeout {
            resource: resource.into(),
        }
    }

    /// Creates a new AuthenticationFailed error
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        GithubError::AuthenticationFailed {
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidRepoUrl error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        ConfigError::InvalidRepoUrl { url: url.into() }
    }

    /// Creates a new MissingCredentials error
    pub fn missing_credentials(variable: impl Into<String>) -> Self {
        ConfigError::MissingCredentials {
            variable: variable.into(),
        }
    }

    /// Creates a new InvalidPrivateKey error
    pub fn invalid_private_key(message: impl Into<String>) -> Self {
        ConfigError::InvalidPrivateKey {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_error_repo_not_found() {
        let err = GithubError::repo_not_found("rust-lang/rust");
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("rust-lang/rust"));
    }

    #[test]
    fn test_github_error_network() {
        let err = GithubError::network_error("owner/repo", "issues", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch issues"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_github_error_invalid_response() {
        let err = GithubError::invalid_response("contributors", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid response"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_github_error_timeout() {
        let err = GithubError::timeout("commit activity");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("commit activity"));
    }

    #[test]
    fn test_github_error_authentication() {
        let err = GithubError::authentication_failed("bad signature");
        let msg = format!("{}", err);
        assert!(msg.contains("authentication failed"));
        assert!(msg.contains("bad signature"));
    }

    #[test]
    fn test_config_error_invalid_url() {
        let err = ConfigError::invalid_repo_url("ftp://example.com");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid repository URL"));
        assert!(msg.contains("ftp://example.com"));
    }

    #[test]
    fn test_config_error_missing_credentials() {
        let err = ConfigError::missing_credentials("GITHUB_APP_ID");
        let msg = format!("{}", err);
        assert!(msg.contains("GITHUB_APP_ID"));
    }

    #[test]
    fn test_app_error_from_github_error() {
        let gh_err = GithubError::RateLimitExceeded;
        let app_err: AppError = gh_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("rate limit"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::missing_credentials("GEMINI_API_KEY");
        let app_err: AppError = config_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("missing credential"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = GithubError::repo_not_found("a/b");
        let debug = format!("{:?}", err);
        assert!(debug.contains("RepoNotFound"));
    }
}

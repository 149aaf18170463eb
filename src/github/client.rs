//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional bearer token attached to every request
//! - Exponential backoff retry logic (max 3 retries)
//! - Rate limit and authentication error mapping

use crate::error::GithubError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("repoprof/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
    token: Option<String>,
    accept: Option<&'static str>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, GithubError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, GithubError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                GithubError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
            token: None,
            accept: None,
        })
    }

    /// Set the bearer token attached to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the Accept header sent with every request
    pub fn with_accept(mut self, accept: &'static str) -> Self {
        self.accept = Some(accept);
        self
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        match self.accept {
            Some(accept) => builder.header(reqwest::header::ACCEPT, accept),
            None => builder,
        }
    }

    /// Map an error status code to a GithubError, if it is one
    fn status_error(status: StatusCode, repo: &str, resource: &str) -> Option<GithubError> {
        if status == StatusCode::NOT_FOUND {
            return Some(GithubError::repo_not_found(repo));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Some(GithubError::authentication_failed(format!(
                "HTTP {} for {}",
                status, resource
            )));
        }
        if !status.is_success() {
            return Some(GithubError::network_error(
                repo,
                resource,
                format!("HTTP {}", status),
            ));
        }
        None
    }

    /// Perform a GET request with retry logic and error context
    pub async fn get_with_context(
        &self,
        url: &str,
        repo: &str,
        resource: &str,
    ) -> Result<reqwest::Response, GithubError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            match self.request(self.client.get(url)).send().await {
                Ok(response) => {
                    // Rate limiting is the one error status worth retrying
                    if response.status() == StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(GithubError::RateLimitExceeded);

                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(delay)).await;
                            delay *= 2;
                            continue;
                        }
                    } else if let Some(err) = Self::status_error(response.status(), repo, resource)
                    {
                        return Err(err);
                    } else {
                        return Ok(response);
                    }
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error = Some(GithubError::timeout(resource));
                    } else {
                        last_error =
                            Some(GithubError::network_error(repo, resource, e.to_string()));
                    }

                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| GithubError::network_error(repo, resource, "unknown error")))
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        repo: &str,
        resource: &str,
    ) -> Result<T, GithubError> {
        let response = self.get_with_context(url, repo, resource).await?;

        response.json::<T>().await.map_err(|e| {
            GithubError::invalid_response(resource, format!("failed to parse JSON: {}", e))
        })
    }

    /// Perform a POST request with a JSON body and parse the JSON response
    pub async fn post_json<B, T>(
        &self,
        url: &str,
        body: &B,
        resource: &str,
    ) -> Result<T, GithubError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .request(self.client.post(url).json(body))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GithubError::timeout(resource)
                } else {
                    GithubError::network_error("", resource, e.to_string())
                }
            })?;

        if let Some(err) = Self::status_error(response.status(), "", resource) {
            return Err(err);
        }

        response.json::<T>().await.map_err(|e| {
            GithubError::invalid_response(resource, format!("failed to parse JSON: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(60), "test-agent/1.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_token_and_accept() {
        let client = HttpClient::new()
            .unwrap()
            .with_token("ghs_example")
            .with_accept("application/vnd.github.v3+json");
        assert_eq!(client.token.as_deref(), Some("ghs_example"));
        assert_eq!(client.accept, Some("application/vnd.github.v3+json"));
    }

    #[test]
    fn test_http_client_with_max_retries() {
        let client = HttpClient::new().unwrap().with_max_retries(5);
        assert_eq!(client.max_retries, 5);
    }

    #[test]
    fn test_status_error_not_found() {
        let err = HttpClient::status_error(StatusCode::NOT_FOUND, "a/b", "repository").unwrap();
        assert!(matches!(err, GithubError::RepoNotFound { .. }));
    }

    #[test]
    fn test_status_error_unauthorized() {
        let err = HttpClient::status_error(StatusCode::UNAUTHORIZED, "a/b", "issues").unwrap();
        assert!(matches!(err, GithubError::AuthenticationFailed { .. }));
    }

    #[test]
    fn test_status_error_success_is_none() {
        assert!(HttpClient::status_error(StatusCode::OK, "a/b", "issues").is_none());
        assert!(HttpClient::status_error(StatusCode::ACCEPTED, "a/b", "stats").is_none());
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
        assert!(DEFAULT_USER_AGENT.starts_with("repoprof/"));
        assert_eq!(MAX_RETRIES, 3);
        assert_eq!(BASE_DELAY_MS, 100);
    }
}

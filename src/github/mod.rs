//! GitHub data retrieval
//!
//! This module provides:
//! - A shared HTTP client with retry and backoff
//! - GitHub App authentication (app JWT → installation token)
//! - The repository data source used by the orchestrator
//! - Wire record types consumed by the profiling core

mod api;
mod auth;
mod client;
mod types;

pub use api::{GithubClient, RepoDataSource, GITHUB_API_URL};
pub use auth::Credentials;
pub use client::HttpClient;
pub use types::{
    CommitWeek, ContentRecord, ContributorRecord, IssueRecord, Label, License, RepoDetails,
    RootEntry,
};

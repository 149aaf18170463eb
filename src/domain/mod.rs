//! Core domain models for repoprof
//!
//! This module contains the value types produced and consumed by the
//! profiling pipeline:
//! - Dependency records parsed from manifest files
//! - Activity trend and issue health aggregates
//! - Contributor records
//! - The final repository report

mod activity;
mod contributor;
mod dependency;
mod issue_health;
mod report;

pub use activity::ActivityTrends;
pub use contributor::Contributor;
pub use dependency::{Dependency, DependencyReport};
pub use issue_health::IssueHealth;
pub use report::RepoReport;

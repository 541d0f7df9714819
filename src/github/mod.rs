//! GitHub API operations module
//!
//! Typed operations over the GitHub REST API. Every operation reaches the
//! network through the [`client::GitHubClient`] chokepoint.

pub mod client;
pub mod error;
pub mod types;
pub(crate) mod util;

// Re-export client types
pub use client::GitHubClient;

// Re-export error types
pub use error::{GitHubError, GitHubResult};

// GitHub API operations
pub mod analyze_repository;
pub mod create_workflow_issue;
pub mod list_org_repositories;
pub mod monitor_ci_status;

// Re-export operations and their result types
pub use analyze_repository::{
    RecentActivity, RepositoryAnalysis, Suggestion, WorkflowTotals, analyze_repository,
};
pub use create_workflow_issue::{IssueCreated, create_workflow_issue};
pub use list_org_repositories::{RepositoryListing, XCLOUD_ORG, list_xcloud_repositories};
pub use monitor_ci_status::{WorkflowRunStatus, monitor_ci_status};

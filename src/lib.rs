//! `xcloud_mcp` - GitHub automation tools for the xCloud platform
//!
//! This library provides an async GitHub service layer for the xCloud agent:
//! repository analysis, templated workflow issues, CI monitoring and
//! organization listings, plus a Gemini CLI integration for free-form
//! analysis. Each GitHub operation is implemented in its own module and
//! exposed as an MCP tool.

// Module declarations
pub mod config;
pub mod gemini;
pub mod github;

// Re-export configuration types
pub use config::{Config, ConfigError};

// Re-export Gemini CLI types
pub use gemini::{AnalysisOutput, GeminiCli, GeminiError};

// Re-export GitHub client types
pub use github::GitHubClient;

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export GitHub operations and their result types
pub use github::{
    IssueCreated,
    RecentActivity,
    RepositoryAnalysis,
    RepositoryListing,
    Suggestion,
    WorkflowRunStatus,
    WorkflowTotals,
    XCLOUD_ORG,
    analyze_repository,
    create_workflow_issue,
    list_xcloud_repositories,
    monitor_ci_status,
};

// MCP Tools (conditional compilation)
#[cfg(feature = "mcp")]
pub mod tool;

#[cfg(feature = "mcp")]
pub use tool::{
    AnalyzeRepositoryArgs, CreateWorkflowIssueArgs, MonitorCiStatusArgs, RunGeminiAnalysisArgs,
    XcloudServer,
};

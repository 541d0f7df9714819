//! Typed GitHub API response schemas
//!
//! Only the fields the tools consume are declared; serde drops the rest.
//! Fields the API documents as nullable are `Option`, counters default to
//! zero when absent.

use serde::{Deserialize, Serialize};

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Clone, Debug, Deserialize)]
pub struct Repository {
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

/// Response of `GET /repos/{owner}/{repo}/actions/workflows`.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkflowList {
    /// Total workflows in the repository, not just the returned page.
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

/// One workflow definition.
#[derive(Clone, Debug, Deserialize)]
pub struct Workflow {
    pub state: String,
}

/// Response of `GET /repos/{owner}/{repo}/actions/runs`.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkflowRunList {
    /// Total runs recorded for the repository, not just the returned page.
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}

/// One workflow run, newest first in the API's ordering.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkflowRun {
    pub name: Option<String>,
    pub status: String,
    pub conclusion: Option<String>,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub actor: Option<Actor>,
    pub created_at: String,
    pub html_url: String,
}

/// Account that triggered a workflow run.
#[derive(Clone, Debug, Deserialize)]
pub struct Actor {
    pub login: String,
}

/// One entry of `GET /orgs/{org}/repos`.
#[derive(Clone, Debug, Deserialize)]
pub struct OrgRepository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
}

/// Request body for `POST /repos/{owner}/{repo}/issues`.
#[derive(Clone, Debug, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The subset of the created-issue response the tools report back.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
}

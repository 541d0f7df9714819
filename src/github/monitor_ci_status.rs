//! CI status monitoring
//!
//! Projects a repository's most recent workflow runs into the compact shape
//! an agent acts on.

use log::info;
use serde::Serialize;

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;
use crate::github::types::WorkflowRun;
use crate::github::util::parse_repo_spec;

/// One workflow run, reduced to its actionable fields.
#[derive(Clone, Debug, Serialize)]
pub struct WorkflowRunStatus {
    pub workflow: Option<String>,
    pub status: String,
    /// `None` while the run is still in progress.
    pub conclusion: Option<String>,
    pub branch: Option<String>,
    /// First seven characters of the head SHA.
    pub commit: String,
    pub actor: Option<String>,
    pub created_at: String,
    pub html_url: String,
}

impl From<WorkflowRun> for WorkflowRunStatus {
    fn from(run: WorkflowRun) -> Self {
        Self {
            workflow: run.name,
            status: run.status,
            conclusion: run.conclusion,
            branch: run.head_branch,
            commit: run.head_sha.chars().take(7).collect(),
            actor: run.actor.map(|a| a.login),
            created_at: run.created_at,
            html_url: run.html_url,
        }
    }
}

/// Fetch the `limit` most recent workflow runs of `repo`, newest first.
///
/// An empty list is a valid result, not an error.
pub async fn monitor_ci_status(
    client: &GitHubClient,
    repo: &str,
    limit: u32,
) -> GitHubResult<Vec<WorkflowRunStatus>> {
    let (owner, name) = parse_repo_spec(repo)?;

    let runs = client.list_workflow_runs(&owner, &name, limit).await?;
    info!(
        "Fetched {} recent workflow runs for {owner}/{name}",
        runs.workflow_runs.len()
    );

    Ok(runs
        .workflow_runs
        .into_iter()
        .map(WorkflowRunStatus::from)
        .collect())
}

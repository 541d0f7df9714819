//! Repository analysis
//!
//! Aggregates repository metadata, workflow definitions and a sample of
//! recent runs into one summary, with improvement suggestions derived from
//! the workflow state.

use chrono::Local;
use log::info;
use serde::Serialize;

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;
use crate::github::util::parse_repo_spec;

/// Page size of the recent-run sample the analysis is based on.
const RECENT_RUNS_PAGE: u32 = 20;

/// Failure rate above which a reliability suggestion is emitted.
const FAILURE_RATE_THRESHOLD: f64 = 0.2;

/// Analysis summary for one repository.
#[derive(Clone, Debug, Serialize)]
pub struct RepositoryAnalysis {
    /// `owner/name` as parsed from the input.
    pub repository: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub workflows: WorkflowTotals,
    pub recent_activity: RecentActivity,
    pub suggestions: Vec<Suggestion>,
    /// ISO-8601 capture time, local timezone.
    pub timestamp: String,
}

/// Workflow definition counts.
#[derive(Clone, Debug, Serialize)]
pub struct WorkflowTotals {
    /// All workflows known to the repository, not just the returned page.
    pub total: u64,
    /// Workflows whose state is `active`.
    pub active: u64,
}

/// Conclusion counts over the sampled recent runs.
#[derive(Clone, Debug, Serialize)]
pub struct RecentActivity {
    /// All runs recorded for the repository, not just the sample.
    pub total_runs: u64,
    pub successful_runs: u64,
    pub failed_runs: u64,
}

/// One improvement suggestion.
#[derive(Clone, Debug, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub title: String,
    pub description: String,
}

/// Analyze a repository's CI setup and recent activity.
///
/// `analysis_type` selects the requested profile (general, workflows,
/// security, performance); it is recorded in the log, the collected data is
/// the same for all profiles. The three upstream calls run in order and the
/// first failure aborts the analysis.
pub async fn analyze_repository(
    client: &GitHubClient,
    repo_url: &str,
    analysis_type: &str,
) -> GitHubResult<RepositoryAnalysis> {
    let (owner, name) = parse_repo_spec(repo_url)?;
    info!("Analyzing repository {owner}/{name} ({analysis_type})");

    let repository = client.get_repository(&owner, &name).await?;
    let workflow_list = client.list_workflows(&owner, &name).await?;
    let runs = client
        .list_workflow_runs(&owner, &name, RECENT_RUNS_PAGE)
        .await?;

    let active = workflow_list
        .workflows
        .iter()
        .filter(|w| w.state == "active")
        .count() as u64;
    let successful_runs = runs
        .workflow_runs
        .iter()
        .filter(|r| r.conclusion.as_deref() == Some("success"))
        .count() as u64;
    let failed_runs = runs
        .workflow_runs
        .iter()
        .filter(|r| r.conclusion.as_deref() == Some("failure"))
        .count() as u64;

    let workflows = WorkflowTotals {
        total: workflow_list.total_count,
        active,
    };
    let recent_activity = RecentActivity {
        total_runs: runs.total_count,
        successful_runs,
        failed_runs,
    };
    let suggestions = derive_suggestions(&workflows, &recent_activity);

    Ok(RepositoryAnalysis {
        repository: format!("{owner}/{name}"),
        description: repository.description,
        language: repository.language,
        stars: repository.stargazers_count,
        forks: repository.forks_count,
        workflows,
        recent_activity,
        suggestions,
        timestamp: Local::now().to_rfc3339(),
    })
}

fn derive_suggestions(workflows: &WorkflowTotals, activity: &RecentActivity) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if workflows.total == 0 {
        suggestions.push(Suggestion {
            kind: "workflow".to_string(),
            priority: "high".to_string(),
            title: "Implement CI/CD workflows".to_string(),
            description: "Repository has no GitHub Actions workflows configured".to_string(),
        });
    }

    if activity.failed_runs > 0 {
        // total_runs is the upstream total, the counters cover the sampled
        // page; clamp so the ratio never divides by zero.
        let failure_rate = activity.failed_runs as f64 / activity.total_runs.max(1) as f64;
        if failure_rate > FAILURE_RATE_THRESHOLD {
            suggestions.push(Suggestion {
                kind: "reliability".to_string(),
                priority: "high".to_string(),
                title: "Improve workflow reliability".to_string(),
                description: format!("High failure rate: {:.1}%", failure_rate * 100.0),
            });
        }
    }

    suggestions
}

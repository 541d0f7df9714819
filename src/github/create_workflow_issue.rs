//! Workflow issue creation
//!
//! Files a templated tracking issue for setting up a CI, CD or build
//! workflow. The template fixes labels and body; callers may override the
//! title.

use log::info;
use serde::Serialize;

use crate::github::client::GitHubClient;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::types::NewIssue;
use crate::github::util::parse_repo_spec;

/// Issue template for one workflow category.
struct IssueTemplate {
    title: &'static str,
    labels: &'static [&'static str],
    body: &'static str,
}

static CI_TEMPLATE: IssueTemplate = IssueTemplate {
    title: "Implement CI workflow (continuous integration)",
    labels: &["enhancement", "ci-cd", "workflow", "priority-high"],
    body: r"## Goal

Set up a continuous integration workflow that validates every change before it merges.

### Tasks

- [ ] Create `.github/workflows/ci.yml`
- [ ] Run the automated test suite on push and pull request
- [ ] Add lint and format checks
- [ ] Build the project as part of the run
- [ ] Cache dependencies between runs

### Acceptance criteria

- CI runs on every push and pull request
- Failing checks block merging
- A full run finishes in under ten minutes

---
_Issue created automatically by the xCloud bot._
",
};

static CD_TEMPLATE: IssueTemplate = IssueTemplate {
    title: "Implement CD workflow (continuous deployment)",
    labels: &["enhancement", "ci-cd", "workflow", "deployment"],
    body: r"## Goal

Set up a continuous deployment workflow that ships every change that passes CI.

### Tasks

- [ ] Create `.github/workflows/cd.yml`
- [ ] Deploy automatically when CI passes on the default branch
- [ ] Configure staging and production environments
- [ ] Require a manual approval for production deploys
- [ ] Document the rollback procedure

### Acceptance criteria

- Merges to the default branch reach staging without manual steps
- Production deploys go through an approval gate
- A failed deploy can be rolled back in one step

---
_Issue created automatically by the xCloud bot._
",
};

static BUILD_TEMPLATE: IssueTemplate = IssueTemplate {
    title: "Implement build workflow",
    labels: &["enhancement", "build", "workflow"],
    body: r"## Goal

Set up a build workflow that produces versioned, downloadable artifacts.

### Tasks

- [ ] Create `.github/workflows/build.yml`
- [ ] Build release artifacts for every tag
- [ ] Attach the artifacts to the workflow run
- [ ] Verify artifact integrity before publishing

### Acceptance criteria

- Tagged releases produce downloadable artifacts
- Build failures are visible on the tag

---
_Issue created automatically by the xCloud bot._
",
};

fn template_for(workflow_type: &str) -> Option<&'static IssueTemplate> {
    match workflow_type {
        "ci" => Some(&CI_TEMPLATE),
        "cd" => Some(&CD_TEMPLATE),
        "build" => Some(&BUILD_TEMPLATE),
        _ => None,
    }
}

/// Confirmation returned after the issue is filed.
#[derive(Clone, Debug, Serialize)]
pub struct IssueCreated {
    pub success: bool,
    pub issue_url: String,
    pub issue_number: u64,
    /// Title as echoed back by GitHub.
    pub title: String,
}

/// File a workflow tracking issue in `repo`.
///
/// `workflow_type` must be `ci`, `cd` or `build`; anything else fails
/// validation without touching the network. A non-empty `title` overrides
/// the template default.
pub async fn create_workflow_issue(
    client: &GitHubClient,
    repo: &str,
    workflow_type: &str,
    title: Option<&str>,
) -> GitHubResult<IssueCreated> {
    let template = template_for(workflow_type).ok_or_else(|| {
        GitHubError::Validation(format!(
            "Invalid workflow type '{workflow_type}', expected one of: ci, cd, build"
        ))
    })?;
    let (owner, name) = parse_repo_spec(repo)?;

    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => template.title,
    };

    info!("Creating {workflow_type} workflow issue in {owner}/{name}");

    let issue = client
        .create_issue(
            &owner,
            &name,
            &NewIssue {
                title: title.to_string(),
                body: template.body.to_string(),
                labels: template.labels.iter().map(|l| l.to_string()).collect(),
            },
        )
        .await?;

    Ok(IssueCreated {
        success: true,
        issue_url: issue.html_url,
        issue_number: issue.number,
        title: issue.title,
    })
}

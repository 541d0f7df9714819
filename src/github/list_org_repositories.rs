//! Organization repository listing
//!
//! Lists the xCloud platform repositories of the organization and checks
//! each one for GitHub Actions workflows. The initial listing must succeed;
//! per-repository workflow lookups degrade the affected entry instead of
//! failing the whole call.

use log::{info, warn};
use serde::Serialize;

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;

/// Organization whose repositories make up the xCloud platform.
pub const XCLOUD_ORG: &str = "PageCloudv1";

/// Name prefix marking a repository as part of the platform.
const XCLOUD_PREFIX: &str = "xcloud-";

/// Page size for the organization listing.
const ORG_REPOS_PAGE: u32 = 100;

/// One platform repository with its workflow-presence flag.
#[derive(Clone, Debug, Serialize)]
pub struct RepositoryListing {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    pub has_workflows: bool,
    /// Present when the workflow lookup for this entry failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// List the `xcloud-` repositories of [`XCLOUD_ORG`] with workflow presence.
pub async fn list_xcloud_repositories(
    client: &GitHubClient,
) -> GitHubResult<Vec<RepositoryListing>> {
    let repos = client
        .list_org_repositories(XCLOUD_ORG, ORG_REPOS_PAGE)
        .await?;

    let mut listings = Vec::new();
    for repo in repos
        .into_iter()
        .filter(|r| r.name.starts_with(XCLOUD_PREFIX))
    {
        // One lookup per entry, in listing order.
        let (has_workflows, error) = match client.list_workflows(XCLOUD_ORG, &repo.name).await {
            Ok(workflows) => (workflows.total_count > 0, None),
            Err(e) => {
                warn!("Workflow lookup for {} failed: {e}", repo.full_name);
                (false, Some(e.to_string()))
            }
        };

        listings.push(RepositoryListing {
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description,
            language: repo.language,
            html_url: repo.html_url,
            has_workflows,
            error,
        });
    }

    info!(
        "Found {} {XCLOUD_PREFIX}* repositories in {XCLOUD_ORG}",
        listings.len()
    );
    Ok(listings)
}

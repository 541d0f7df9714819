//! Arguments for the `create_workflow_issue` tool

use schemars::JsonSchema;
use serde::Deserialize;

/// Arguments accepted by `create_workflow_issue`.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct CreateWorkflowIssueArgs {
    /// Target repository, as `owner/repo` or a full GitHub URL.
    pub repo: String,
    /// Workflow template to file: `ci`, `cd` or `build`.
    pub workflow_type: String,
    /// Issue title override. The template default is used when omitted or
    /// empty.
    #[serde(default)]
    pub title: Option<String>,
}

//! Arguments for the `analyze_repository` tool

use schemars::JsonSchema;
use serde::Deserialize;

fn default_analysis_type() -> String {
    "general".to_string()
}

/// Arguments accepted by `analyze_repository`.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct AnalyzeRepositoryArgs {
    /// Repository to analyze, as `owner/repo` or a full GitHub URL.
    pub repo_url: String,
    /// Requested analysis profile: general, workflows, security or
    /// performance. Defaults to `general`.
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

//! Arguments for the `monitor_ci_status` tool

use schemars::JsonSchema;
use serde::Deserialize;

fn default_limit() -> u32 {
    10
}

/// Arguments accepted by `monitor_ci_status`.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct MonitorCiStatusArgs {
    /// Repository to monitor, as `owner/repo` or a full GitHub URL.
    pub repo: String,
    /// Maximum number of recent runs to return. Defaults to 10.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

//! Arguments for the `run_gemini_analysis` tool

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments accepted by `run_gemini_analysis`.
#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct RunGeminiAnalysisArgs {
    /// Prompt forwarded to the Gemini CLI.
    pub prompt: String,
    /// Optional JSON context forwarded alongside the prompt.
    #[serde(default)]
    pub context: Option<Value>,
}

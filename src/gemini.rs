//! Gemini CLI integration
//!
//! Runs the external `gemini_cli` program as a child process for free-form
//! analysis. The prompt and an optional JSON context blob are passed as
//! arguments; no shell is involved.

use std::process::Stdio;

use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;

use crate::config::Config;

/// Errors from the analysis child process.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The process could not be started.
    #[error("{0}")]
    Spawn(String),

    /// The process ran and exited non-zero.
    #[error("Analysis command failed with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },
}

impl GeminiError {
    /// Structured record embedded in tool error results, mirroring the shape
    /// used for GitHub failures.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "error": {
                "kind": "PROCESS_ERROR",
                "message": self.to_string(),
            }
        })
    }
}

/// Result of one analysis invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutput {
    /// stdout parsed as JSON.
    Json(Value),
    /// stdout verbatim, when it is not valid JSON.
    Text(String),
}

/// Adapter around the external Gemini CLI.
#[derive(Clone, Debug)]
pub struct GeminiCli {
    program: String,
    api_key: Option<String>,
}

impl GeminiCli {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.gemini_cli_path.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Run one analysis.
    ///
    /// `context` is serialized and forwarded as `--context=...`; when absent
    /// an empty JSON object is sent. The configured API key is exported to
    /// the child as `GEMINI_API_KEY`.
    pub async fn invoke(
        &self,
        prompt: &str,
        context: Option<&Value>,
    ) -> Result<AnalysisOutput, GeminiError> {
        let context = context.map_or_else(|| "{}".to_string(), Value::to_string);

        let mut command = Command::new(&self.program);
        command
            .arg(format!("--prompt={prompt}"))
            .arg(format!("--context={context}"))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(key) = &self.api_key {
            command.env("GEMINI_API_KEY", key);
        }

        let output = command.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GeminiError::Spawn(format!(
                    "Gemini CLI not found at '{}'. Is it installed?",
                    self.program
                ))
            } else {
                GeminiError::Spawn(format!("Failed to run '{}': {e}", self.program))
            }
        })?;

        if !output.status.success() {
            return Err(GeminiError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(parse_output(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

/// Interpret stdout as JSON when possible, otherwise pass it through.
fn parse_output(stdout: String) -> AnalysisOutput {
    match serde_json::from_str::<Value>(&stdout) {
        Ok(value) => AnalysisOutput::Json(value),
        Err(_) => AnalysisOutput::Text(stdout),
    }
}

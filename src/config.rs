//! Environment-backed server configuration.
//!
//! All knobs are read once at startup by [`Config::from_env`]; nothing else
//! in the crate touches the environment.

use std::env;

use thiserror::Error;

/// Public GitHub REST endpoint, overridable for tests and GitHub Enterprise.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Runtime configuration for the server process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token sent as `Authorization: Bearer ...` on every GitHub call (`GITHUB_TOKEN`).
    pub github_token: String,
    /// Base URL of the GitHub REST API, no trailing slash (`GITHUB_API_BASE`).
    pub github_api_base: String,
    /// API key forwarded to the Gemini CLI child process (`GEMINI_API_KEY`).
    pub gemini_api_key: Option<String>,
    /// Executable name or path of the Gemini CLI (`GEMINI_CLI_PATH`).
    pub gemini_cli_path: String,
    /// Listen host for the SSE server (`HOST`).
    pub host: String,
    /// Listen port for the SSE server (`PORT`).
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GITHUB_TOKEN` is required; everything else has a default. Trailing
    /// slashes on `GITHUB_API_BASE` are trimmed so endpoint paths can always
    /// start with `/`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_token =
            env::var("GITHUB_TOKEN").map_err(|_| ConfigError::MissingEnvVar("GITHUB_TOKEN"))?;

        let github_api_base = env::var("GITHUB_API_BASE")
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let gemini_api_key = env::var("GEMINI_API_KEY").ok();

        let gemini_cli_path =
            env::var("GEMINI_CLI_PATH").unwrap_or_else(|_| "gemini_cli".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        Ok(Self {
            github_token,
            github_api_base,
            gemini_api_key,
            gemini_cli_path,
            host,
            port,
        })
    }
}

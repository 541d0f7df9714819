//! MCP Tools for xCloud GitHub automation
//!
//! This module provides Model Context Protocol (MCP) tool wrappers around
//! the core GitHub operations and the Gemini CLI for use in AI agent
//! systems.

// Tool argument schemas
pub mod analyze_repository;
pub mod create_workflow_issue;
pub mod monitor_ci_status;
pub mod run_gemini_analysis;

pub use analyze_repository::AnalyzeRepositoryArgs;
pub use create_workflow_issue::CreateWorkflowIssueArgs;
pub use monitor_ci_status::MonitorCiStatusArgs;
pub use run_gemini_analysis::RunGeminiAnalysisArgs;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::config::Config;
use crate::gemini::{AnalysisOutput, GeminiCli};
use crate::github::{self, GitHubClient};

/// MCP server exposing the xCloud automation tool set.
#[derive(Clone)]
pub struct XcloudServer {
    github: GitHubClient,
    gemini: GeminiCli,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl XcloudServer {
    pub fn new(config: &Config) -> Self {
        Self {
            github: GitHubClient::new(config),
            gemini: GeminiCli::new(config),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Analyze a GitHub repository's CI/CD setup and recent workflow activity, returning improvement suggestions"
    )]
    async fn analyze_repository(
        &self,
        Parameters(args): Parameters<AnalyzeRepositoryArgs>,
    ) -> Result<CallToolResult, McpError> {
        match github::analyze_repository(&self.github, &args.repo_url, &args.analysis_type).await
        {
            Ok(analysis) => pretty_result(&analysis),
            Err(e) => Ok(error_result(e.to_value())),
        }
    }

    #[tool(
        description = "Create a templated GitHub issue for setting up a ci, cd or build workflow"
    )]
    async fn create_workflow_issue(
        &self,
        Parameters(args): Parameters<CreateWorkflowIssueArgs>,
    ) -> Result<CallToolResult, McpError> {
        match github::create_workflow_issue(
            &self.github,
            &args.repo,
            &args.workflow_type,
            args.title.as_deref(),
        )
        .await
        {
            Ok(created) => pretty_result(&created),
            Err(e) => Ok(error_result(e.to_value())),
        }
    }

    #[tool(description = "Show the status of a repository's most recent workflow runs")]
    async fn monitor_ci_status(
        &self,
        Parameters(args): Parameters<MonitorCiStatusArgs>,
    ) -> Result<CallToolResult, McpError> {
        match github::monitor_ci_status(&self.github, &args.repo, args.limit).await {
            Ok(runs) => pretty_result(&runs),
            Err(e) => Ok(error_result(e.to_value())),
        }
    }

    #[tool(
        description = "List the xcloud-* repositories of the PageCloudv1 organization, with workflow presence per repository"
    )]
    async fn get_xcloud_repositories(&self) -> Result<CallToolResult, McpError> {
        match github::list_xcloud_repositories(&self.github).await {
            Ok(listings) => pretty_result(&listings),
            Err(e) => Ok(error_result(e.to_value())),
        }
    }

    #[tool(description = "Run a free-form analysis prompt through the Gemini CLI")]
    async fn run_gemini_analysis(
        &self,
        Parameters(args): Parameters<RunGeminiAnalysisArgs>,
    ) -> Result<CallToolResult, McpError> {
        match self.gemini.invoke(&args.prompt, args.context.as_ref()).await {
            Ok(AnalysisOutput::Json(value)) => pretty_result(&value),
            Ok(AnalysisOutput::Text(text)) => pretty_result(&json!({ "response": text })),
            Err(e) => Ok(error_result(e.to_value())),
        }
    }
}

#[tool_handler]
impl ServerHandler for XcloudServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "GitHub automation for the xCloud platform: repository analysis, templated \
                 workflow issues, CI monitoring, organization listings and Gemini-assisted \
                 analysis."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Serialize a tool payload as pretty-printed JSON text content.
fn pretty_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Wrap a structured error record as a failed tool call.
fn error_result(record: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&record).unwrap_or_else(|_| record.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

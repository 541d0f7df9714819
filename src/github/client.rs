//! GitHub API client
//!
//! The single chokepoint for outbound GitHub traffic. Every operation funnels
//! through [`GitHubClient::request`], which attaches authentication headers
//! and normalizes failures into [`GitHubError`]. Requests are issued exactly
//! once; nothing here retries or paginates.

use log::warn;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::types::{
    CreatedIssue, NewIssue, OrgRepository, Repository, WorkflowList, WorkflowRunList,
};

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("xcloud-mcp/", env!("CARGO_PKG_VERSION"));

/// GitHub API client.
///
/// Cloning is cheap (the inner reqwest client is an Arc).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Error body GitHub attaches to non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.github_api_base.clone(),
            token: config.github_token.clone(),
        }
    }

    /// Issue one request against the GitHub API.
    ///
    /// `endpoint` is appended to the configured base URL and must start with
    /// `/`. Transport failures become [`GitHubError::Network`], non-2xx
    /// statuses [`GitHubError::Upstream`] and undecodable 2xx bodies
    /// [`GitHubError::Decode`]. Each failure is logged once here.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> GitHubResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("GitHub request to {url} failed: {e}");
            GitHubError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(status, &body);
            warn!("GitHub API error on {url}: {} {message}", status.as_u16());
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                warn!("Unexpected response shape from {url}: {e}");
                GitHubError::Decode(e.to_string())
            } else {
                warn!("GitHub request to {url} failed: {e}");
                GitHubError::Network(e.to_string())
            }
        })
    }

    /// Fetch repository metadata.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> GitHubResult<Repository> {
        self.request(Method::GET, &format!("/repos/{owner}/{repo}"), None::<&Value>)
            .await
    }

    /// List the workflow definitions of a repository.
    pub async fn list_workflows(&self, owner: &str, repo: &str) -> GitHubResult<WorkflowList> {
        self.request(
            Method::GET,
            &format!("/repos/{owner}/{repo}/actions/workflows"),
            None::<&Value>,
        )
        .await
    }

    /// List recent workflow runs, newest first. One page of `per_page` entries.
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> GitHubResult<WorkflowRunList> {
        self.request(
            Method::GET,
            &format!("/repos/{owner}/{repo}/actions/runs?per_page={per_page}"),
            None::<&Value>,
        )
        .await
    }

    /// List up to `per_page` repositories of an organization.
    pub async fn list_org_repositories(
        &self,
        org: &str,
        per_page: u32,
    ) -> GitHubResult<Vec<OrgRepository>> {
        self.request(
            Method::GET,
            &format!("/orgs/{org}/repos?per_page={per_page}"),
            None::<&Value>,
        )
        .await
    }

    /// Open an issue.
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> GitHubResult<CreatedIssue> {
        self.request(
            Method::POST,
            &format!("/repos/{owner}/{repo}/issues"),
            Some(issue),
        )
        .await
    }
}

/// Extract the upstream `{"message": ...}` error text, falling back to the
/// raw body, then to the canonical status reason.
fn upstream_message(status: StatusCode, body: &str) -> String {
    if let Ok(UpstreamErrorBody { message }) = serde_json::from_str(body) {
        return message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

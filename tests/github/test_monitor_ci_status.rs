//! Tests for CI status monitoring.

use serde_json::json;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xcloud_mcp::{GitHubError, monitor_ci_status};

use super::common::test_client;

#[tokio::test]
async fn test_runs_are_projected_with_short_commit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot/actions/runs"))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "workflow_runs": [
                {
                    "name": "CI",
                    "status": "completed",
                    "conclusion": "success",
                    "head_branch": "main",
                    "head_sha": "abc123def4567890abc123def4567890abc123de",
                    "actor": { "login": "xcloud-bot" },
                    "created_at": "2024-01-02T10:00:00Z",
                    "html_url": "https://github.com/PageCloudv1/xcloud-bot/actions/runs/2"
                },
                {
                    "name": "Deploy",
                    "status": "in_progress",
                    "conclusion": null,
                    "head_branch": "release",
                    "head_sha": "def456abc1230000",
                    "actor": { "login": "rootkit7628" },
                    "created_at": "2024-01-01T10:00:00Z",
                    "html_url": "https://github.com/PageCloudv1/xcloud-bot/actions/runs/1"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let runs = monitor_ci_status(&client, "PageCloudv1/xcloud-bot", 5)
        .await
        .unwrap();

    assert_eq!(runs.len(), 2);

    assert_eq!(runs[0].workflow.as_deref(), Some("CI"));
    assert_eq!(runs[0].status, "completed");
    assert_eq!(runs[0].conclusion.as_deref(), Some("success"));
    assert_eq!(runs[0].branch.as_deref(), Some("main"));
    assert_eq!(runs[0].commit, "abc123d");
    assert_eq!(runs[0].actor.as_deref(), Some("xcloud-bot"));

    // An in-progress run has no conclusion yet.
    assert_eq!(runs[1].status, "in_progress");
    assert_eq!(runs[1].conclusion, None);
    assert_eq!(runs[1].commit, "def456a");
}

#[tokio::test]
async fn test_no_runs_is_a_valid_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-new/actions/runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 0,
            "workflow_runs": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let runs = monitor_ci_status(&client, "PageCloudv1/xcloud-new", 10)
        .await
        .unwrap();

    assert!(runs.is_empty());
}

#[tokio::test]
async fn test_limit_is_forwarded_as_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot/actions/runs"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 0,
            "workflow_runs": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    monitor_ci_status(&client, "PageCloudv1/xcloud-bot", 25)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rate_limited_monitor_surfaces_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot/actions/runs"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = monitor_ci_status(&client, "PageCloudv1/xcloud-bot", 10)
        .await
        .unwrap_err();

    match err {
        GitHubError::Upstream { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API rate limit exceeded");
        }
        other => panic!("Expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_repo_fails_without_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = monitor_ci_status(&client, "no-slash-here", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubError::Validation(_)));
}

//! Tests for the GitHub API client chokepoint.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xcloud_mcp::GitHubError;

use super::common::test_client;

#[tokio::test]
async fn test_requests_carry_auth_and_api_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot"))
        .and(header("Authorization", "Bearer ghp_test_token"))
        .and(header("Accept", "application/vnd.github+json"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": null,
            "language": null,
            "stargazers_count": 0,
            "forks_count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .get_repository("PageCloudv1", "xcloud-bot")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(user_agent.starts_with("xcloud-mcp/"));
}

#[tokio::test]
async fn test_unreachable_host_maps_to_network_error() {
    // Learn a free port from a throwaway listener, then release it so the
    // connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = test_client(&format!("http://127.0.0.1:{port}"));
    let err = client
        .get_repository("PageCloudv1", "xcloud-bot")
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubError::Network(_)));
}

#[tokio::test]
async fn test_error_body_without_message_field_uses_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway from proxy"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_repository("PageCloudv1", "xcloud-bot")
        .await
        .unwrap_err();

    match err {
        GitHubError::Upstream { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway from proxy");
        }
        other => panic!("Expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_repository("PageCloudv1", "xcloud-bot")
        .await
        .unwrap_err();

    match err {
        GitHubError::Upstream { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("Expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/PageCloudv1/xcloud-bot/actions/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_workflows("PageCloudv1", "xcloud-bot")
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubError::Decode(_)));
}

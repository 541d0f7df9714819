// xCloud MCP Server: GitHub automation tools
//
// This binary serves the xCloud tool set over the MCP SSE transport,
// with a /health route for liveness probes. Configuration comes from
// the environment; see Config::from_env.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Json;
use axum::routing::get;
use log::{error, info};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use xcloud_mcp::XcloudServer;
use xcloud_mcp::config::Config;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Arc::new(Config::from_env().context("Loading configuration")?);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Parsing listen address")?;

    let (sse_server, router) = SseServer::new(SseServerConfig {
        bind: addr,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    });
    let router = router.route("/health", get(health));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Binding {addr}"))?;

    let shutdown = sse_server.config.ct.child_token();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        shutdown.cancelled().await;
    });
    tokio::spawn(async move {
        if let Err(e) = server.await {
            error!("HTTP server terminated: {e}");
        }
    });

    let ct = sse_server.with_service(move || XcloudServer::new(&config));

    info!("xcloud-mcp listening on {addr}");
    info!("Available tools:");
    info!("  analyze_repository      - repository analysis with suggestions");
    info!("  create_workflow_issue   - templated workflow issues");
    info!("  monitor_ci_status       - recent workflow run status");
    info!("  get_xcloud_repositories - PageCloudv1 repository listing");
    info!("  run_gemini_analysis     - Gemini CLI analysis");

    tokio::signal::ctrl_c()
        .await
        .context("Waiting for shutdown signal")?;
    info!("Shutting down");
    ct.cancel();

    Ok(())
}

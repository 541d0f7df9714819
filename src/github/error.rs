//! GitHub API error types
//!
//! Every GitHub operation fails with one of the kinds below, and every tool
//! reports failures as the structured record produced by
//! [`GitHubError::to_value`].

use serde_json::{Value, json};
use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Malformed input, rejected before any network traffic
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Transport-level failure reaching the GitHub API
    #[error("Network error: {0}")]
    Network(String),

    /// GitHub answered with an error status
    #[error("GitHub API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// A 2xx response body did not match the expected schema
    #[error("Unexpected GitHub response: {0}")]
    Decode(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Taxonomy tag carried in tool error records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Upstream { .. } | Self::Decode(_) => "UPSTREAM_ERROR",
        }
    }

    /// HTTP status of the upstream failure, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured record embedded in tool error results:
    /// `{"error": {"kind", "status_code"?, "message"}}`.
    pub fn to_value(&self) -> Value {
        let message = match self {
            Self::Validation(m) | Self::Network(m) | Self::Decode(m) => m,
            Self::Upstream { message, .. } => message,
        };

        let mut error = json!({
            "kind": self.kind(),
            "message": message,
        });
        if let Some(status) = self.status_code() {
            error["status_code"] = json!(status);
        }

        json!({ "error": error })
    }
}

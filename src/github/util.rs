//! GitHub API utilities

use crate::github::error::{GitHubError, GitHubResult};

/// Split a repository spec into `(owner, name)`.
///
/// The owner and name are the last two `/`-separated segments, so both plain
/// `owner/repo` specs and full repository URLs are accepted. Both segments
/// must be non-empty; anything else is rejected here, before any network
/// call.
pub(crate) fn parse_repo_spec(spec: &str) -> GitHubResult<(String, String)> {
    let invalid =
        || GitHubError::Validation(format!("Invalid repository '{spec}', expected owner/repo"));

    let mut segments = spec.rsplit('/');
    let name = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    Ok((owner.to_string(), name.to_string()))
}

//! Utility functions for GitHub operations

use anyhow::{Result, anyhow};

/// Parse GitHub URL to extract owner and repository name
///
/// Supports various GitHub URL formats:
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns an error if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim_end_matches('/').trim_end_matches(".git");

    // git@github.com:owner/repo or git@github-enterprise:owner/repo
    if url.starts_with("git@")
        && let Some((_, after_colon)) = url.split_once(':')
        && let Some((owner, repo)) = split_pair(after_colon)
    {
        return Ok((owner, repo));
    }

    if url.starts_with("https://") || url.starts_with("http://") {
        let without_protocol = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() >= 3 && !parts[1].is_empty() && !parts[2].is_empty() {
            return Ok((parts[1].to_string(), parts[2].to_string()));
        }
    }

    if url.contains("github.com") {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() >= 3 {
            let idx = parts.len() - 2;
            return Ok((parts[idx].to_string(), parts[idx + 1].to_string()));
        }
    }

    Err(anyhow!("Invalid GitHub URL format: {}", url))
}

/// Parse an `owner/repo` slug, the form used by `GITHUB_REPOSITORY`
///
/// Full URLs are accepted too and handed to [`parse_github_url`].
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    let slug = slug.trim();
    if slug.contains("://") || slug.starts_with("git@") || slug.contains("github.com") {
        return parse_github_url(slug);
    }

    split_pair(slug.trim_end_matches(".git"))
        .ok_or_else(|| anyhow!("Invalid repository '{}': expected owner/repo", slug))
}

fn split_pair(value: &str) -> Option<(String, String)> {
    let (owner, repo) = value.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}

//! Pull request operations

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct CreatePullRequestPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    draft: Option<bool>,
}

impl<'a> From<&PullRequestParams<'a>> for CreatePullRequestPayload<'a> {
    fn from(params: &PullRequestParams<'a>) -> Self {
        Self {
            title: params.title,
            head: params.head,
            base: params.base,
            body: params.body,
            draft: if params.draft { Some(true) } else { None },
        }
    }
}

/// The subset of GitHub's pull request resource the tool reports back
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub html_url: String,
    pub number: u64,
}

/// Parameters for creating a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestParams<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub title: &'a str,
    pub head: &'a str,
    pub base: &'a str,
    pub body: &'a str,
    pub draft: bool,
}

impl<'a> PullRequestParams<'a> {
    pub fn new(
        owner: &'a str,
        repo: &'a str,
        title: &'a str,
        head: &'a str,
        base: &'a str,
        body: &'a str,
        draft: bool,
    ) -> Self {
        Self {
            owner,
            repo,
            title,
            head,
            base,
            body,
            draft,
        }
    }
}

impl GitHubClient {
    fn pulls_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/pulls", self.api_base, owner, repo)
    }

    /// Create a pull request on GitHub
    ///
    /// Exactly one request is sent; failures are returned as-is and never retried.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No authentication token is configured
    /// - The API request fails
    /// - GitHub answers with a non-success status (validation, conflict, permissions)
    /// - The response cannot be parsed
    pub async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest> {
        let Some(token) = &self.token else {
            anyhow::bail!(
                "GitHub token is required for creating pull requests. Set GITHUB_TOKEN environment variable."
            );
        };

        let url = self.pulls_url(params.owner, params.repo);
        tracing::debug!(%url, head = params.head, base = params.base, "creating pull request");

        let payload = CreatePullRequestPayload::from(&params);

        let response = self
            .client
            .post(&url)
            .header("User-Agent", self.user_agent())
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("token {}", token))
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "GitHub API error ({} {}): {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                error_text
            ));
        }

        let pr: PullRequest = response
            .json()
            .await
            .context("Failed to parse PR creation response")?;
        Ok(pr)
    }
}

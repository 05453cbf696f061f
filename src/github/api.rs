//! Seam between the publisher and the hosting platform's REST API

use anyhow::Result;
use async_trait::async_trait;
use link_updater_github::{GitHubClient, PullRequest, PullRequestParams};

/// An authorized handle able to open pull requests
#[async_trait]
pub trait PullRequestApi: Send + Sync {
    /// Send one pull request creation request
    async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest>;
}

#[async_trait]
impl PullRequestApi for GitHubClient {
    async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest> {
        GitHubClient::create_pull_request(self, params).await
    }
}

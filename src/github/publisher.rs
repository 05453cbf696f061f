//! Opening the link update pull request

use super::api::PullRequestApi;
use super::types::{CreatedPullRequest, PublishTarget};
use crate::changes::LinkChange;
use crate::error::PublishError;
use crate::report::build_report;
use link_updater_github::PullRequestParams;

/// Files the link change report as a pull request through a [`PullRequestApi`]
pub struct PullRequestPublisher<A> {
    api: A,
    target: PublishTarget,
}

impl<A: PullRequestApi> PullRequestPublisher<A> {
    pub fn new(api: A, target: PublishTarget) -> Self {
        Self { api, target }
    }

    pub fn target(&self) -> &PublishTarget {
        &self.target
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Open a pull request from `branch_name` into the target's base branch
    /// whose body is the report for `changes`
    ///
    /// Exactly one creation request is sent. Any failure is returned as a
    /// [`PublishError`] and not retried; calling this twice for the same
    /// branch attempts to open two pull requests.
    pub async fn publish(
        &self,
        changes: &[LinkChange],
        branch_name: &str,
    ) -> Result<CreatedPullRequest, PublishError> {
        let body = build_report(changes);
        let params = PullRequestParams::new(
            &self.target.owner,
            &self.target.repo,
            &self.target.title,
            branch_name,
            &self.target.base_branch,
            &body,
            self.target.draft,
        );

        let pr = self.api.create_pull_request(params).await.map_err(|e| {
            let error = PublishError::from(e);
            tracing::debug!(
                error = error.message(),
                head = branch_name,
                "pull request creation failed"
            );
            error
        })?;

        tracing::info!(number = pr.number, url = %pr.html_url, "created pull request");
        Ok(CreatedPullRequest {
            number: pr.number,
            url: pr.html_url,
        })
    }
}

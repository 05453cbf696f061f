//! Publish command: open the link update pull request

use super::{Command, CommandContext};
use crate::github::{PullRequestApi, PullRequestPublisher, PublishTarget};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Opens one pull request from `branch_name` carrying the change report
pub struct PublishCommand<A> {
    pub publisher: PullRequestPublisher<A>,
    pub branch_name: String,
}

impl<A: PullRequestApi> PublishCommand<A> {
    pub fn new(api: A, target: PublishTarget, branch_name: impl Into<String>) -> Self {
        Self {
            publisher: PullRequestPublisher::new(api, target),
            branch_name: branch_name.into(),
        }
    }
}

#[async_trait]
impl<A: PullRequestApi> Command for PublishCommand<A> {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let target = self.publisher.target();
        println!(
            "{}",
            format!(
                "Opening pull request {} -> {} on {}/{}...",
                self.branch_name, target.base_branch, target.owner, target.repo
            )
            .green()
        );

        // Errors are reported once, by main
        let pr = self
            .publisher
            .publish(&context.changes, &self.branch_name)
            .await?;

        println!(
            "{} {}",
            format!("✨ Created PR #{}:", pr.number).green(),
            pr.url
        );
        Ok(())
    }
}

//! GitHub publication types

use crate::constants::github::{DEFAULT_BASE_BRANCH, DEFAULT_PR_TITLE};
use anyhow::Result;
use link_updater_github::parse_repo_slug;

/// Where and how the link update pull request is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub owner: String,
    pub repo: String,
    pub base_branch: String,
    pub title: String,
    pub draft: bool,
}

impl PublishTarget {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            title: DEFAULT_PR_TITLE.to_string(),
            draft: false,
        }
    }

    /// Target from an `owner/repo` slug or a GitHub URL
    pub fn from_slug(slug: &str) -> Result<Self> {
        let (owner, repo) = parse_repo_slug(slug)?;
        Ok(Self::new(owner, repo))
    }

    pub fn with_base_branch(mut self, base_branch: impl Into<String>) -> Self {
        self.base_branch = base_branch.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

/// The pull request that was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPullRequest {
    pub number: u64,
    pub url: String,
}

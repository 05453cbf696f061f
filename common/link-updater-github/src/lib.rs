//! GitHub API client library
//!
//! This library provides the authorized client handle used to file the link
//! update pull request against a repository.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`pull_requests`]: Pull request creation
//! - [`util`]: Repository URL and slug parsing

mod client;
mod pull_requests;
mod util;

// Re-export public API
pub use client::{DEFAULT_API_BASE, GitHubClient};
pub use pull_requests::{PullRequest, PullRequestParams};
pub use util::{parse_github_url, parse_repo_slug};

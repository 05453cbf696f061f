//! Publication of the link change report as a GitHub pull request
//!
//! - [`api`]: the [`PullRequestApi`] seam, implemented by the GitHub client
//! - [`publisher`]: report building plus the single creation request
//! - [`types`]: publication target and result types

pub mod api;
pub mod publisher;
pub mod types;

pub use api::PullRequestApi;
pub use link_updater_github::GitHubClient;
pub use publisher::PullRequestPublisher;
pub use types::{CreatedPullRequest, PublishTarget};

//! Link Updater - reports rewritten repository links and opens a pull request for them

pub mod changes;
pub mod commands;
pub mod constants;
pub mod error;
pub mod github;
pub mod report;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use changes::{LinkChange, load_changes};
pub use commands::{Command, CommandContext};
pub use error::PublishError;
pub use github::{CreatedPullRequest, PublishTarget, PullRequestApi, PullRequestPublisher};
pub use report::build_report;

//! Command implementations for the link-updater CLI

pub mod base;
pub mod publish;
pub mod report;
pub mod validators;

pub use base::{Command, CommandContext};
pub use publish::PublishCommand;
pub use report::ReportCommand;

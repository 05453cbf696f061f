//! Markdown report of link changes, used as the pull request body
//!
//! - [`grouping`]: stable partition of the change list by file
//! - [`builder`]: rendering of the grouped changes into markdown

pub mod builder;
pub mod grouping;

pub use builder::{build_report, display_name, pluralize};
pub use grouping::{FileChanges, group_by_file};

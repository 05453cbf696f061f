//! Report command: print the pull request body without publishing it

use super::{Command, CommandContext};
use crate::report::build_report;
use anyhow::Result;
use async_trait::async_trait;

pub struct ReportCommand;

#[async_trait]
impl Command for ReportCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!("{}", build_report(&context.changes));
        Ok(())
    }
}

//! Base types and traits for the command pattern

use crate::changes::LinkChange;
use anyhow::Result;

/// Context passed to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Link changes handed over by the rewriting stage, in discovery order
    pub changes: Vec<LinkChange>,
}

impl CommandContext {
    pub fn new(changes: Vec<LinkChange>) -> Self {
        Self { changes }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}

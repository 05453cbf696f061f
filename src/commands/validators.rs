//! Command argument validation utilities
//!
//! Checks on CLI arguments that go beyond what clap parsing enforces.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "{} not provided. Use {}",
                        argument,
                        alternatives.join(" or ")
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Resolve the GitHub token from the flag or the GITHUB_TOKEN environment variable
pub fn resolve_token(token: Option<String>) -> Result<String> {
    token
        .filter(|t| !t.trim().is_empty())
        .or_else(|| std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty()))
        .ok_or_else(|| {
            validation_error_to_anyhow(CommandValidationError::MissingRequired {
                argument: "GitHub token".to_string(),
                alternatives: vec![
                    "--token".to_string(),
                    "GITHUB_TOKEN environment variable".to_string(),
                ],
            })
        })
}

/// Validate the head or base branch name of the pull request
pub fn validate_branch_name(argument: &str, name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        validation_error_to_anyhow(CommandValidationError::InvalidValue {
            argument: argument.to_string(),
            value: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.trim().is_empty() {
        return Err(invalid("branch name cannot be empty or whitespace only"));
    }

    // Basic Git branch name validation
    if name.starts_with('-')
        || name.ends_with('.')
        || name.ends_with('/')
        || name.contains("..")
        || name.chars().any(|c| c.is_whitespace() || "~^:?*[\\".contains(c))
    {
        return Err(invalid("invalid Git branch name format"));
    }

    Ok(())
}

/// Validate the pull request title
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "title".to_string(),
                value: title.to_string(),
                reason: "title cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}

/// Require the target repository
pub fn require_repository(repo: Option<String>) -> Result<String> {
    repo.filter(|r| !r.trim().is_empty()).ok_or_else(|| {
        validation_error_to_anyhow(CommandValidationError::MissingRequired {
            argument: "Repository".to_string(),
            alternatives: vec![
                "--repo owner/name".to_string(),
                "GITHUB_REPOSITORY environment variable".to_string(),
            ],
        })
    })
}

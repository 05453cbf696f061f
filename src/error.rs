use thiserror::Error;

/// Failure to open the link update pull request
///
/// Carries the description of whatever went wrong underneath: missing
/// credentials, transport errors, or a rejection by the hosting platform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to create PR: {message}")]
pub struct PublishError {
    message: String,
}

impl PublishError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the underlying failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for PublishError {
    fn from(error: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        Self::new(format!("{error:#}"))
    }
}

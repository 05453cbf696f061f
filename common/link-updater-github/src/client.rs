//! GitHub client implementation

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("link-updater/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making authenticated requests
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    /// If no token is provided, will try to read from GITHUB_TOKEN environment variable
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.or_else(|| std::env::var("GITHUB_TOKEN").ok()),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different REST endpoint, e.g. a GitHub Enterprise
    /// instance at `https://github.example.com/api/v3`
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn user_agent(&self) -> &'static str {
        USER_AGENT
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_explicit_token_is_used() {
        let client = GitHubClient::new(Some("ghp_explicit".to_string()));
        assert_eq!(client.token.as_deref(), Some("ghp_explicit"));
    }

    #[test]
    #[serial]
    fn test_token_falls_back_to_env() {
        let original_token = std::env::var("GITHUB_TOKEN").ok();
        unsafe {
            std::env::set_var("GITHUB_TOKEN", "ghp_from_env");
        }

        let client = GitHubClient::new(None);

        unsafe {
            match original_token {
                Some(value) => std::env::set_var("GITHUB_TOKEN", value),
                None => std::env::remove_var("GITHUB_TOKEN"),
            }
        }

        assert_eq!(client.token.as_deref(), Some("ghp_from_env"));
    }

    #[test]
    #[serial]
    fn test_no_token_without_env() {
        let original_token = std::env::var("GITHUB_TOKEN").ok();
        unsafe {
            std::env::remove_var("GITHUB_TOKEN");
        }

        let client = GitHubClient::default();

        if let Some(value) = original_token {
            unsafe {
                std::env::set_var("GITHUB_TOKEN", value);
            }
        }

        assert!(client.token.is_none());
    }

    #[test]
    fn test_api_base_override_trims_trailing_slash() {
        let client = GitHubClient::new(Some("t".to_string()))
            .with_api_base("https://github.example.com/api/v3/");
        assert_eq!(client.api_base(), "https://github.example.com/api/v3");
    }

    #[test]
    fn test_default_api_base() {
        let client = GitHubClient::new(Some("t".to_string()));
        assert_eq!(client.api_base(), DEFAULT_API_BASE);
        assert!(client.user_agent().starts_with("link-updater/"));
    }
}

//! GitHub content source configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_owner() -> String {
    String::from("fatherfilth")
}

fn default_repo() -> String {
    String::from("AI-Documentation-Library")
}

fn default_api_base_url() -> String {
    String::from("https://api.github.com")
}

fn default_user_agent() -> String {
    String::from("ryder/0.1")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// Repository owner (user or organisation).
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name.
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Personal access token. Empty means unauthenticated (60 req/hr).
    /// Also read from the plain `GITHUB_TOKEN` variable.
    #[serde(default)]
    pub token: String,

    /// REST API root, overridable for GitHub Enterprise.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            token: String::new(),
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitHubConfig {
    /// The bearer token, if one is configured.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        let token = self.token.trim();
        (!token.is_empty()).then_some(token)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::invalid("github.owner", "must not be empty"));
        }
        if self.repo.trim().is_empty() {
            return Err(ConfigError::invalid("github.repo", "must not be empty"));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "github.api_base_url",
                "must be an http(s) URL",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("github.timeout_secs", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unauthenticated() {
        let config = GitHubConfig::default();
        assert!(!config.is_authenticated());
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn whitespace_token_counts_as_missing() {
        let config = GitHubConfig {
            token: "   ".into(),
            ..Default::default()
        };
        assert_eq!(config.token(), None);
    }

    #[test]
    fn token_is_trimmed() {
        let config = GitHubConfig {
            token: " ghp_abc \n".into(),
            ..Default::default()
        };
        assert_eq!(config.token(), Some("ghp_abc"));
        assert!(config.is_authenticated());
    }

    #[test]
    fn empty_repo_is_invalid() {
        let config = GitHubConfig {
            repo: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("github.repo"));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = GitHubConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

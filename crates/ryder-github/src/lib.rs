//! # ryder-github
//!
//! Read-only access to the content repository through the GitHub REST
//! contents API.
//!
//! Two operations are exposed, both behind the [`ContentSource`] trait so the
//! content pipeline can run against a substitute transport:
//! - list the entries of a directory
//! - fetch one file (base64 at the transport boundary, decoded by the caller
//!   with [`FileContent::decode`])
//!
//! A bearer token is optional. Without one the client still works, against
//! GitHub's unauthenticated quota of 60 requests per hour.

mod contents;
mod error;
mod http;
pub mod memory;

pub use error::GitHubError;

use async_trait::async_trait;
use base64::Engine as _;
use ryder_config::GitHubConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Types ──────────────────────────────────────────────────────────

/// Owner/repository pair every request is made against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &GitHubConfig) -> Self {
        Self::new(config.owner.clone(), config.repo.clone())
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// What a directory entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

impl EntryKind {
    /// Map GitHub's `type` string; unknown kinds yield `None`.
    #[must_use]
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "file" => Some(Self::File),
            "dir" => Some(Self::Dir),
            "symlink" => Some(Self::Symlink),
            "submodule" => Some(Self::Submodule),
            _ => None,
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// File or directory name (`cursor.md`).
    pub name: String,
    /// Path from the repository root (`docs/tools/cursor.md`).
    pub path: String,
    pub kind: EntryKind,
}

impl DirEntry {
    #[must_use]
    pub fn file(path: &str) -> Self {
        Self::new(path, EntryKind::File)
    }

    #[must_use]
    pub fn dir(path: &str) -> Self {
        Self::new(path, EntryKind::Dir)
    }

    fn new(path: &str, kind: EntryKind) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            kind,
        }
    }
}

/// Raw content of one file as returned by the contents API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub path: String,
    /// Transport encoding; GitHub uses `base64` for files under 1 MB and
    /// `none` (with empty content) above that.
    pub encoding: String,
    pub content: String,
}

impl FileContent {
    /// Wrap UTF-8 text the way the API would transmit it.
    #[must_use]
    pub fn from_text(path: impl Into<String>, text: &str) -> Self {
        Self {
            path: path.into(),
            encoding: String::from("base64"),
            content: base64::engine::general_purpose::STANDARD.encode(text),
        }
    }

    /// Decode the transported bytes into UTF-8 text.
    ///
    /// GitHub wraps base64 payloads at 60 columns; embedded whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Decode`] for a non-base64 encoding, invalid
    /// base64, or bytes that are not UTF-8.
    pub fn decode(&self) -> Result<String, GitHubError> {
        if self.encoding != "base64" {
            return Err(self.decode_error(format!("unsupported encoding '{}'", self.encoding)));
        }
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(compact)
            .map_err(|e| self.decode_error(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| self.decode_error(e.to_string()))
    }

    fn decode_error(&self, reason: String) -> GitHubError {
        GitHubError::Decode {
            path: self.path.clone(),
            reason,
        }
    }
}

/// Request quota the client runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitMode {
    Authenticated,
    Unauthenticated,
}

impl RateLimitMode {
    /// Requests per hour GitHub grants in this mode.
    #[must_use]
    pub const fn hourly_quota(self) -> u32 {
        match self {
            Self::Authenticated => 5000,
            Self::Unauthenticated => 60,
        }
    }
}

// ── Source seam ────────────────────────────────────────────────────

/// Read-only view of a content repository.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List the entries of the directory at `path`.
    ///
    /// # Errors
    ///
    /// [`GitHubError::NotFound`] when the path does not exist,
    /// [`GitHubError::NotADirectory`] when it names a file, anything else
    /// for transport or quota failures.
    async fn list_directory(&self, repo: &RepoRef, path: &str)
    -> Result<Vec<DirEntry>, GitHubError>;

    /// Fetch the file at `path`.
    ///
    /// # Errors
    ///
    /// [`GitHubError::NotFound`] when the path does not exist,
    /// [`GitHubError::NotAFile`] when it names a directory, anything else
    /// for transport or quota failures.
    async fn get_file(&self, repo: &RepoRef, path: &str) -> Result<FileContent, GitHubError>;

    /// Quota mode of the underlying transport.
    fn rate_limit_mode(&self) -> RateLimitMode;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the GitHub contents API.
///
/// Immutable after construction and safe to share across concurrent fetches.
pub struct GitHubClient {
    http: reqwest::Client,
    api_base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client from configuration.
    ///
    /// Logs a warning when no token is configured.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let token = config.token().map(str::to_string);
        if token.is_none() {
            tracing::warn!(
                quota = RateLimitMode::Unauthenticated.hourly_quota(),
                "no GitHub token configured, using unauthenticated mode; set GITHUB_TOKEN for builds"
            );
        }

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> RateLimitMode {
        if self.token.is_some() {
            RateLimitMode::Authenticated
        } else {
            RateLimitMode::Unauthenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_handles_wrapped_base64() {
        // "---\ntitle: x\n---\nbody" wrapped like GitHub does
        let file = FileContent {
            path: "docs/tools/x.md".into(),
            encoding: "base64".into(),
            content: "LS0tCnRpdGxl\nOiB4Ci0tLQpi\nb2R5\n".into(),
        };
        assert_eq!(file.decode().unwrap(), "---\ntitle: x\n---\nbody");
    }

    #[test]
    fn decode_rejects_unsupported_encoding() {
        let file = FileContent {
            path: "docs/big.md".into(),
            encoding: "none".into(),
            content: String::new(),
        };
        let err = file.decode().unwrap_err();
        assert!(matches!(err, GitHubError::Decode { ref path, .. } if path == "docs/big.md"));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let file = FileContent {
            path: "docs/bin.md".into(),
            encoding: "base64".into(),
            content: base64::engine::general_purpose::STANDARD.encode([0xff, 0xfe, 0xfd]),
        };
        assert!(file.decode().is_err());
    }

    #[test]
    fn from_text_roundtrips() {
        let file = FileContent::from_text("a.md", "héllo");
        assert_eq!(file.decode().unwrap(), "héllo");
    }

    #[test]
    fn dir_entry_name_is_last_segment() {
        let entry = DirEntry::file("docs/tools/cursor.md");
        assert_eq!(entry.name, "cursor.md");
        assert_eq!(entry.kind, EntryKind::File);
    }

    #[test]
    fn client_mode_follows_token() {
        let anonymous = GitHubClient::new(&GitHubConfig::default()).unwrap();
        assert_eq!(anonymous.mode(), RateLimitMode::Unauthenticated);

        let config = GitHubConfig {
            token: "ghp_test".into(),
            ..Default::default()
        };
        let authed = GitHubClient::new(&config).unwrap();
        assert_eq!(authed.mode(), RateLimitMode::Authenticated);
        assert_eq!(authed.mode().hourly_quota(), 5000);
    }

    #[test]
    fn repo_ref_display() {
        let repo = RepoRef::from_config(&GitHubConfig::default());
        assert_eq!(repo.to_string(), "fatherfilth/AI-Documentation-Library");
    }
}

//! GitHub client error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when reading from the content repository.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested path does not exist in the repository.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The request quota is exhausted.
    #[error("rate limited{}", reset_suffix(.reset_at))]
    RateLimited {
        /// When the quota resets, if GitHub said so.
        reset_at: Option<DateTime<Utc>>,
    },

    /// The credential was rejected or lacks access.
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16 },

    /// GitHub returned any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A listing was requested for something that is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    /// File content was requested for something that is not a file.
    #[error("not a file: {path}")]
    NotAFile { path: String },

    /// File content could not be decoded to UTF-8 text.
    #[error("cannot decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

#[allow(clippy::ref_option)]
fn reset_suffix(reset_at: &Option<DateTime<Utc>>) -> String {
    reset_at
        .map(|t| format!(" until {}", t.to_rfc3339()))
        .unwrap_or_default()
}

impl GitHubError {
    /// Whether this is a plain "path does not exist" answer.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the remote source itself is unusable, as opposed to one path
    /// failing. Systemic errors abort whole operations instead of being
    /// skipped per item.
    #[must_use]
    pub const fn is_systemic(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn classification() {
        assert!(GitHubError::NotFound { path: "docs/x".into() }.is_not_found());
        assert!(!GitHubError::NotFound { path: "docs/x".into() }.is_systemic());
        assert!(GitHubError::RateLimited { reset_at: None }.is_systemic());
        assert!(GitHubError::Unauthorized { status: 401 }.is_systemic());
        assert!(
            !GitHubError::Api {
                status: 502,
                message: String::new()
            }
            .is_systemic()
        );
    }

    #[test]
    fn rate_limited_message_includes_reset() {
        let reset = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let err = GitHubError::RateLimited {
            reset_at: Some(reset),
        };
        assert_eq!(err.to_string(), "rate limited until 2025-06-01T12:00:00+00:00");
        assert_eq!(
            GitHubError::RateLimited { reset_at: None }.to_string(),
            "rate limited"
        );
    }
}

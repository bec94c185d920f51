//! Content pipeline error types.

use ryder_core::validation::Violations;
use ryder_github::GitHubError;
use thiserror::Error;

/// Errors raised while turning repository files into content.
///
/// Only [`ContentError::is_systemic`] errors escape the aggregate operations;
/// everything else is confined to the one file or entry it concerns.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content source failed.
    #[error(transparent)]
    Source(#[from] GitHubError),

    /// The frontmatter block could not be split or parsed.
    #[error("malformed frontmatter in {path}: {reason}")]
    Frontmatter { path: String, reason: String },

    /// The frontmatter parsed but failed schema validation.
    #[error("invalid frontmatter in {path}: {violations}")]
    Invalid { path: String, violations: Violations },

    /// A YAML data file could not be parsed.
    #[error("malformed YAML in {path}: {reason}")]
    Yaml { path: String, reason: String },
}

impl ContentError {
    /// Whether the content source itself is unusable.
    #[must_use]
    pub const fn is_systemic(&self) -> bool {
        match self {
            Self::Source(e) => e.is_systemic(),
            _ => false,
        }
    }
}

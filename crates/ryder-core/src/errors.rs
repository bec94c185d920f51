//! Cross-cutting error types for Ryder.
//!
//! Transport and content errors live in their own crates (`GitHubError`,
//! `ContentError`); the binary converges them through `anyhow`.

use thiserror::Error;

use crate::validation::Violations;

/// Errors that can be raised by any Ryder crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name any member of a closed enum.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: String, value: String },

    /// Lookup returned no result.
    #[error("not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A document failed schema validation.
    #[error("validation failed: {0}")]
    Validation(Violations),
}

impl CoreError {
    pub(crate) fn unknown_variant(kind: &str, value: &str) -> Self {
        Self::UnknownVariant {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<Violations> for CoreError {
    fn from(violations: Violations) -> Self {
        Self::Validation(violations)
    }
}

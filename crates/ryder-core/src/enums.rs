//! Closed-set enums for articles and leaderboard entries.
//!
//! Each enum serializes to the exact string used in the content repository
//! (`in-progress`, `ui-ux`, ...). Display metadata (labels, icons, ordering)
//! is attached through exhaustive `match` so adding a variant forces every
//! lookup to be revisited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Top-level content folder an article lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Models,
    Tools,
    Skills,
    Repos,
    Agents,
    Projects,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Models,
        Self::Tools,
        Self::Skills,
        Self::Repos,
        Self::Agents,
        Self::Projects,
    ];

    /// Folder name and URL segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Models => "models",
            Self::Tools => "tools",
            Self::Skills => "skills",
            Self::Repos => "repos",
            Self::Agents => "agents",
            Self::Projects => "projects",
        }
    }

    /// Capitalized heading used on category pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Models => "Models",
            Self::Tools => "Tools",
            Self::Skills => "Skills",
            Self::Repos => "Repos",
            Self::Agents => "Agents",
            Self::Projects => "Projects",
        }
    }

    /// Accent colour key for cards and badges.
    #[must_use]
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Models => "violet",
            Self::Tools => "teal",
            Self::Skills => "amber",
            Self::Repos => "slate",
            Self::Agents => "rose",
            Self::Projects => "sky",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("category", s))
    }
}

// ---------------------------------------------------------------------------
// ArticleStatus
// ---------------------------------------------------------------------------

/// Editorial status of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleStatus {
    InProgress,
    Stable,
    Complete,
}

impl ArticleStatus {
    pub const ALL: [Self; 3] = [Self::InProgress, Self::Stable, Self::Complete];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Stable => "stable",
            Self::Complete => "complete",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Stable => "Stable",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("status", s))
    }
}

// ---------------------------------------------------------------------------
// EntryType
// ---------------------------------------------------------------------------

/// Kind of thing a leaderboard entry ranks.
///
/// Variant order is the leaderboard display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Tool,
    Skill,
    Model,
    Application,
    Workflow,
}

impl EntryType {
    /// Every entry type, in display order.
    pub const ALL: [Self; 5] = [
        Self::Tool,
        Self::Skill,
        Self::Model,
        Self::Application,
        Self::Workflow,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Skill => "skill",
            Self::Model => "model",
            Self::Application => "application",
            Self::Workflow => "workflow",
        }
    }

    /// Plural section heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tool => "Tools",
            Self::Skill => "Skills",
            Self::Model => "Models",
            Self::Application => "Applications",
            Self::Workflow => "Workflows",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Tool => "🔧",
            Self::Skill => "🧠",
            Self::Model => "🤖",
            Self::Application => "📱",
            Self::Workflow => "🔄",
        }
    }

    /// Position of this type's section on the leaderboard.
    #[must_use]
    pub const fn display_order(self) -> u8 {
        match self {
            Self::Tool => 0,
            Self::Skill => 1,
            Self::Model => 2,
            Self::Application => 3,
            Self::Workflow => 4,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("type", s))
    }
}

// ---------------------------------------------------------------------------
// Subcategory
// ---------------------------------------------------------------------------

/// Area a leaderboard entry is ranked within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    Coding,
    Design,
    UiUx,
    VideoGen,
    PromptEngineering,
    ProjectBuilding,
    Research,
    Productivity,
    Devops,
    Data,
    Audio,
    Writing,
    Other,
}

impl Subcategory {
    pub const ALL: [Self; 13] = [
        Self::Coding,
        Self::Design,
        Self::UiUx,
        Self::VideoGen,
        Self::PromptEngineering,
        Self::ProjectBuilding,
        Self::Research,
        Self::Productivity,
        Self::Devops,
        Self::Data,
        Self::Audio,
        Self::Writing,
        Self::Other,
    ];

    /// Key as written in `data.yaml`. Subcategory groups sort on this.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Design => "design",
            Self::UiUx => "ui-ux",
            Self::VideoGen => "video-gen",
            Self::PromptEngineering => "prompt-engineering",
            Self::ProjectBuilding => "project-building",
            Self::Research => "research",
            Self::Productivity => "productivity",
            Self::Devops => "devops",
            Self::Data => "data",
            Self::Audio => "audio",
            Self::Writing => "writing",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::Design => "Design",
            Self::UiUx => "UI/UX",
            Self::VideoGen => "Video Generation",
            Self::PromptEngineering => "Prompt Engineering",
            Self::ProjectBuilding => "Project Building",
            Self::Research => "Research",
            Self::Productivity => "Productivity",
            Self::Devops => "DevOps",
            Self::Data => "Data",
            Self::Audio => "Audio",
            Self::Writing => "Writing",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("subcategory", s))
    }
}

// ---------------------------------------------------------------------------
// EntryStatus
// ---------------------------------------------------------------------------

/// Whether a leaderboard entry has been used hands-on or only researched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Used,
    Researched,
}

impl EntryStatus {
    pub const ALL: [Self; 2] = [Self::Used, Self::Researched];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Used => "used",
            Self::Researched => "researched",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("status", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn category_serde_matches_as_str() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn article_status_uses_kebab_case() {
        let json = serde_json::to_string(&ArticleStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: ArticleStatus = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(parsed, ArticleStatus::Complete);
    }

    #[test]
    fn subcategory_serde_matches_as_str() {
        for sub in Subcategory::ALL {
            let json = serde_json::to_string(&sub).unwrap();
            assert_eq!(json, format!("\"{}\"", sub.as_str()));
        }
    }

    #[test]
    fn category_accents_are_distinct() {
        let accents: std::collections::HashSet<_> =
            Category::ALL.into_iter().map(Category::accent).collect();
        assert_eq!(accents.len(), Category::ALL.len());
    }

    #[rstest]
    #[case("models", Category::Models)]
    #[case("projects", Category::Projects)]
    fn category_from_str(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "recipes".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariant { .. }));
        assert!(err.to_string().contains("recipes"));
    }

    #[rstest]
    #[case("ui-ux", Subcategory::UiUx)]
    #[case("video-gen", Subcategory::VideoGen)]
    #[case("devops", Subcategory::Devops)]
    #[case("other", Subcategory::Other)]
    fn subcategory_from_str(#[case] input: &str, #[case] expected: Subcategory) {
        assert_eq!(input.parse::<Subcategory>().unwrap(), expected);
    }

    #[test]
    fn entry_type_display_order_follows_variant_order() {
        let mut sorted = EntryType::ALL;
        sorted.sort_by_key(|t| t.display_order());
        assert_eq!(sorted, EntryType::ALL);
        assert_eq!(EntryType::Application.label(), "Applications");
    }

    #[test]
    fn entry_status_roundtrip() {
        for status in EntryStatus::ALL {
            assert_eq!(status.as_str().parse::<EntryStatus>().unwrap(), status);
        }
        assert!("abandoned".parse::<EntryStatus>().is_err());
    }
}

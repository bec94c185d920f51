use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ArticleStatus, Category};

/// Validated frontmatter of a markdown article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleFrontmatter {
    pub title: String,
    pub status: ArticleStatus,
    pub category: Category,
    pub slug: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A validated article: frontmatter plus its markdown body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub status: ArticleStatus,
    pub category: Category,
    pub slug: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Markdown body with surrounding whitespace trimmed.
    pub content: String,
    /// Repository path the article was read from.
    pub path: String,
}

impl Article {
    /// Assemble an article from validated frontmatter and a raw body.
    #[must_use]
    pub fn from_parts(frontmatter: ArticleFrontmatter, body: &str, path: impl Into<String>) -> Self {
        let ArticleFrontmatter {
            title,
            status,
            category,
            slug,
            created,
            updated,
            author,
            tags,
        } = frontmatter;

        Self {
            title,
            status,
            category,
            slug,
            created,
            updated,
            author,
            tags,
            content: body.trim().to_string(),
            path: path.into(),
        }
    }

    /// Dashboard route for this article, e.g. `/tools/cursor`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("/{}/{}", self.category, self.slug)
    }

    /// Whether `other` occupies the same `(category, slug)` address.
    #[must_use]
    pub fn same_address(&self, other: &Self) -> bool {
        self.category == other.category && self.slug == other.slug
    }

    /// First `max_chars` characters of the body, trimmed.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.content
            .chars()
            .take(max_chars)
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn frontmatter() -> ArticleFrontmatter {
        ArticleFrontmatter {
            title: "Cursor".into(),
            status: ArticleStatus::Stable,
            category: Category::Tools,
            slug: "cursor".into(),
            created: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
            updated: Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).unwrap(),
            author: "ryder".into(),
            tags: vec!["IDE".into()],
        }
    }

    #[test]
    fn from_parts_trims_body() {
        let article = Article::from_parts(frontmatter(), "\n\n# Cursor\n\nBody.\n  ", "docs/tools/cursor.md");
        assert_eq!(article.content, "# Cursor\n\nBody.");
        assert_eq!(article.path, "docs/tools/cursor.md");
        assert_eq!(article.tags, vec!["IDE".to_string()]);
    }

    #[test]
    fn address_joins_category_and_slug() {
        let article = Article::from_parts(frontmatter(), "", "docs/tools/cursor.md");
        assert_eq!(article.address(), "/tools/cursor");
    }

    #[test]
    fn excerpt_counts_chars_not_bytes() {
        let article = Article::from_parts(frontmatter(), "héllo wörld and more", "p");
        assert_eq!(article.excerpt(11), "héllo wörld");
        assert_eq!(article.excerpt(6), "héllo");
    }
}

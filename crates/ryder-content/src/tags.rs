//! Tag index: normalised tag slugs and tag-based relatedness.
//!
//! Everything here is a pure function of an article slice. The
//! [`ContentLibrary`] wrappers fetch all articles first.

use ryder_core::entities::Article;
use ryder_github::ContentSource;
use std::collections::HashSet;

use crate::error::ContentError;
use crate::library::ContentLibrary;

/// Default number of related articles.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// URL-safe slug for a tag.
///
/// Lower-cases, turns whitespace runs into one hyphen, drops everything that
/// is not an ASCII alphanumeric or hyphen, collapses repeated hyphens and
/// trims hyphens from both ends. `normalize_tag(normalize_tag(t))` equals
/// `normalize_tag(t)`.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    let mut slug = String::with_capacity(tag.len());
    let mut pending_hyphen = false;

    for c in tag.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
    }
    slug
}

/// Human label for a slug: hyphens become spaces.
#[must_use]
pub fn slug_to_label(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Distinct tags in first-seen order, original casing.
#[must_use]
pub fn all_tags(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    articles
        .iter()
        .flat_map(|a| a.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Distinct normalised tag slugs in first-seen order. Tags normalising to
/// an empty slug are dropped.
#[must_use]
pub fn all_tag_slugs(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    articles
        .iter()
        .flat_map(|a| a.tags.iter())
        .map(|tag| normalize_tag(tag))
        .filter(|slug| !slug.is_empty() && seen.insert(slug.clone()))
        .collect()
}

/// Original spelling of the first tag normalising to `slug`.
#[must_use]
pub fn tag_display_name(articles: &[Article], slug: &str) -> Option<String> {
    articles
        .iter()
        .flat_map(|a| a.tags.iter())
        .find(|tag| normalize_tag(tag) == slug)
        .cloned()
}

/// Articles carrying a tag that normalises to `slug`, most recently updated
/// first. Equal timestamps keep input order.
#[must_use]
pub fn articles_by_tag(articles: &[Article], slug: &str) -> Vec<Article> {
    let mut matching: Vec<Article> = articles
        .iter()
        .filter(|a| a.tags.iter().any(|tag| normalize_tag(tag) == slug))
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.updated.cmp(&a.updated));
    matching
}

/// Up to `limit` other articles ranked by shared normalised tags.
///
/// Articles at the same `(category, slug)` as `target` and articles with no
/// tag in common are excluded. Ties keep input order.
#[must_use]
pub fn related_articles(articles: &[Article], target: &Article, limit: usize) -> Vec<Article> {
    let target_tags = tag_set(target);
    if target_tags.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &Article)> = articles
        .iter()
        .filter(|a| !a.same_address(target) && !a.tags.is_empty())
        .filter_map(|a| {
            let overlap = tag_set(a).intersection(&target_tags).count();
            (overlap > 0).then_some((overlap, a))
        })
        .collect();
    scored.sort_by(|(x, _), (y, _)| y.cmp(x));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, a)| a.clone())
        .collect()
}

fn tag_set(article: &Article) -> HashSet<String> {
    article
        .tags
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|s| !s.is_empty())
        .collect()
}

impl<S: ContentSource> ContentLibrary<S> {
    /// # Errors
    ///
    /// Propagates article fetch failures.
    pub async fn all_tags(&self) -> Result<Vec<String>, ContentError> {
        Ok(all_tags(&self.fetch_all_articles().await?))
    }

    /// # Errors
    ///
    /// Propagates article fetch failures.
    pub async fn all_tag_slugs(&self) -> Result<Vec<String>, ContentError> {
        Ok(all_tag_slugs(&self.fetch_all_articles().await?))
    }

    /// # Errors
    ///
    /// Propagates article fetch failures.
    pub async fn tag_display_name(&self, slug: &str) -> Result<Option<String>, ContentError> {
        Ok(tag_display_name(&self.fetch_all_articles().await?, slug))
    }

    /// # Errors
    ///
    /// Propagates article fetch failures.
    pub async fn articles_by_tag(&self, slug: &str) -> Result<Vec<Article>, ContentError> {
        Ok(articles_by_tag(&self.fetch_all_articles().await?, slug))
    }

    /// # Errors
    ///
    /// Propagates article fetch failures.
    pub async fn related_articles(
        &self,
        target: &Article,
        limit: usize,
    ) -> Result<Vec<Article>, ContentError> {
        Ok(related_articles(
            &self.fetch_all_articles().await?,
            target,
            limit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use ryder_core::enums::{ArticleStatus, Category};

    fn article(category: Category, slug: &str, tags: &[&str], day: u32) -> Article {
        Article {
            title: slug.to_uppercase(),
            status: ArticleStatus::Stable,
            category,
            slug: slug.into(),
            created: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
            author: "ryder".into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            content: String::new(),
            path: format!("docs/{category}/{slug}.md"),
        }
    }

    fn slugs(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.slug.as_str()).collect()
    }

    #[rstest]
    #[case("AI Coding", "ai-coding")]
    #[case("  Prompt   Engineering ", "prompt-engineering")]
    #[case("C++ / Rust!", "c-rust")]
    #[case("--already--slug--", "already-slug")]
    #[case("Ünïcode Tag", "ncode-tag")]
    #[case("!!!", "")]
    fn normalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_tag(input), expected);
    }

    #[rstest]
    #[case("AI Coding")]
    #[case("C++ / Rust!")]
    #[case(" -a -- b- ")]
    #[case("Tab\tSeparated\nTags")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize_tag(input);
        assert_eq!(normalize_tag(&once), once);
    }

    #[test]
    fn normalize_ignores_case_and_separator_style() {
        assert_eq!(normalize_tag("Machine Learning"), "machine-learning");
        assert_eq!(normalize_tag("machine-learning"), "machine-learning");
    }

    #[test]
    fn slug_label() {
        assert_eq!(slug_to_label("ai-coding"), "ai coding");
    }

    #[test]
    fn all_tags_first_seen_case_preserved() {
        let articles = vec![
            article(Category::Tools, "a", &["IDE", "AI"], 1),
            article(Category::Tools, "b", &["ai", "IDE", "Agents"], 1),
        ];
        assert_eq!(all_tags(&articles), vec!["IDE", "AI", "ai", "Agents"]);
        assert_eq!(all_tag_slugs(&articles), vec!["ide", "ai", "agents"]);
    }

    #[test]
    fn display_name_uses_first_spelling() {
        let articles = vec![
            article(Category::Tools, "a", &["AI Coding"], 1),
            article(Category::Tools, "b", &["ai coding"], 1),
        ];
        assert_eq!(
            tag_display_name(&articles, "ai-coding").as_deref(),
            Some("AI Coding")
        );
        assert_eq!(tag_display_name(&articles, "nope"), None);
    }

    #[test]
    fn by_tag_is_newest_first_and_stable() {
        let articles = vec![
            article(Category::Tools, "old", &["IDE"], 1),
            article(Category::Tools, "new", &["ide"], 9),
            article(Category::Models, "tie-a", &["IDE"], 5),
            article(Category::Repos, "tie-b", &["IDE"], 5),
            article(Category::Tools, "other", &["cli"], 20),
        ];
        assert_eq!(
            slugs(&articles_by_tag(&articles, "ide")),
            vec!["new", "tie-a", "tie-b", "old"]
        );
    }

    #[test]
    fn by_tag_order_is_independent_of_input_order() {
        let articles = vec![
            article(Category::Tools, "d1", &["ide"], 1),
            article(Category::Tools, "d7", &["ide"], 7),
            article(Category::Tools, "d3", &["ide"], 3),
            article(Category::Tools, "d5", &["ide"], 5),
        ];
        let expected = vec!["d7", "d5", "d3", "d1"];
        for rotation in 0..articles.len() {
            let mut permuted = articles.clone();
            permuted.rotate_left(rotation);
            permuted.swap(0, rotation % 2 + 1);
            assert_eq!(slugs(&articles_by_tag(&permuted, "ide")), expected);
        }
    }

    #[test]
    fn related_ranks_by_overlap() {
        let target = article(Category::Tools, "t", &["a", "b", "c"], 1);
        let articles = vec![
            target.clone(),
            article(Category::Tools, "one", &["a"], 1),
            article(Category::Tools, "three", &["A", "b", "c"], 1),
            article(Category::Tools, "none", &["z"], 1),
            article(Category::Models, "two", &["b", "c"], 1),
            article(Category::Skills, "one-b", &["c"], 1),
            article(Category::Repos, "untagged", &[], 1),
        ];
        let related = related_articles(&articles, &target, DEFAULT_RELATED_LIMIT);
        assert_eq!(slugs(&related), vec!["three", "two", "one"]);

        let all = related_articles(&articles, &target, 10);
        assert_eq!(slugs(&all), vec!["three", "two", "one", "one-b"]);
    }

    #[test]
    fn related_excludes_by_address_not_slug() {
        let target = article(Category::Tools, "cursor", &["ide"], 1);
        let articles = vec![
            target.clone(),
            article(Category::Repos, "cursor", &["ide"], 1),
        ];
        let related = related_articles(&articles, &target, 3);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].category, Category::Repos);
    }

    #[test]
    fn related_for_untagged_target_is_empty() {
        let target = article(Category::Tools, "t", &[], 1);
        let articles = vec![article(Category::Tools, "x", &["a"], 1)];
        assert!(related_articles(&articles, &target, 3).is_empty());
    }
}

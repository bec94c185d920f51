//! Weighted approximate search over articles.
//!
//! Each searchable key is matched with an approximate substring distance
//! (edit distance where the match may start and end anywhere in the text).
//! A key matches when that distance, relative to the query length, is at
//! most [`THRESHOLD`].

use ryder_core::entities::Article;
use ryder_github::ContentSource;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::library::ContentLibrary;

pub const THRESHOLD: f64 = 0.3;
pub const MIN_QUERY_CHARS: usize = 2;

/// Article field a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKey {
    Title,
    Tags,
    Content,
}

impl SearchKey {
    pub const ALL: [Self; 3] = [Self::Title, Self::Tags, Self::Content];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Tags => "tags",
            Self::Content => "content",
        }
    }

    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Title => 2.0,
            Self::Tags => 1.5,
            Self::Content => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub article: Article,
    pub score: f64,
    /// Keys that matched, in key order.
    pub matched: Vec<SearchKey>,
}

/// Rank `articles` against `query`, best first. Equal scores keep input
/// order.
#[must_use]
pub fn search_articles(articles: &[Article], query: &str) -> Vec<SearchHit> {
    let pattern: Vec<char> = query.trim().to_lowercase().chars().collect();
    if pattern.len() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = articles
        .iter()
        .filter_map(|article| score_article(article, &pattern))
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

fn score_article(article: &Article, pattern: &[char]) -> Option<SearchHit> {
    let mut score = 0.0;
    let mut matched = Vec::new();

    for key in SearchKey::ALL {
        let distance = match key {
            SearchKey::Title => normalized_distance(pattern, &article.title),
            SearchKey::Tags => article
                .tags
                .iter()
                .filter_map(|tag| normalized_distance(pattern, tag))
                .min_by(f64::total_cmp),
            SearchKey::Content => normalized_distance(pattern, &article.content),
        };
        if let Some(d) = distance.filter(|d| *d <= THRESHOLD) {
            score += key.weight() * (1.0 - d);
            matched.push(key);
        }
    }

    (!matched.is_empty()).then(|| SearchHit {
        article: article.clone(),
        score,
        matched,
    })
}

#[allow(clippy::cast_precision_loss)]
fn normalized_distance(pattern: &[char], text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let text: Vec<char> = text.to_lowercase().chars().collect();
    Some(substring_distance(pattern, &text) as f64 / pattern.len() as f64)
}

/// Smallest edit distance between `pattern` and any substring of `text`.
fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    // column j holds the best distance for pattern[..i] ending at text[..j]
    let mut prev: Vec<usize> = vec![0; text.len() + 1];
    let mut curr: Vec<usize> = vec![0; text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &t) in text.iter().enumerate() {
            let substitution = prev[j] + usize::from(p != t);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev.into_iter().min().unwrap_or(pattern.len())
}

impl<S: ContentSource> ContentLibrary<S> {
    /// Search all articles, keeping at most `limit` hits.
    ///
    /// # Errors
    ///
    /// Propagates article fetch failures.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, ContentError> {
        let articles = self.fetch_all_articles().await?;
        let mut hits = search_articles(&articles, query);
        hits.truncate(limit);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use ryder_core::enums::{ArticleStatus, Category};

    fn article(slug: &str, title: &str, tags: &[&str], content: &str) -> Article {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Article {
            title: title.into(),
            status: ArticleStatus::Stable,
            category: Category::Tools,
            slug: slug.into(),
            created: date,
            updated: date,
            author: "ryder".into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            content: content.into(),
            path: format!("docs/tools/{slug}.md"),
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[rstest]
    #[case("cursor", "the cursor editor", 0)]
    #[case("cursr", "the cursor editor", 1)]
    #[case("curser", "the cursor editor", 1)]
    #[case("abc", "xyz", 3)]
    #[case("abc", "", 3)]
    fn substring_distances(#[case] pattern: &str, #[case] text: &str, #[case] expected: usize) {
        assert_eq!(substring_distance(&chars(pattern), &chars(text)), expected);
    }

    #[test]
    fn short_queries_find_nothing() {
        let articles = vec![article("a", "A", &[], "a")];
        assert!(search_articles(&articles, "a").is_empty());
        assert!(search_articles(&articles, "  ").is_empty());
    }

    #[test]
    fn title_matches_outrank_content_matches() {
        let articles = vec![
            article("body", "Editors", &[], "We tried Cursor for a month."),
            article("title", "Cursor", &[], "An editor."),
            article("none", "Aider", &["cli"], "Terminal pair programmer."),
        ];
        let hits = search_articles(&articles, "cursor");
        let slugs: Vec<_> = hits.iter().map(|h| h.article.slug.as_str()).collect();
        assert_eq!(slugs, vec!["title", "body"]);
        assert_eq!(hits[0].matched, vec![SearchKey::Title]);
        assert!((hits[0].score - 2.0).abs() < f64::EPSILON);
        assert_eq!(hits[1].matched, vec![SearchKey::Content]);
    }

    #[test]
    fn typos_within_threshold_still_match() {
        let articles = vec![article("c", "Cursor", &["IDE"], "")];
        let hits = search_articles(&articles, "Curzor");
        assert_eq!(hits.len(), 1);
        let expected = 2.0 * (1.0 - 1.0 / 6.0);
        assert!((hits[0].score - expected).abs() < 1e-9);
    }

    #[test]
    fn best_tag_counts() {
        let articles = vec![article("t", "Zed", &["rust", "ai coding"], "")];
        let hits = search_articles(&articles, "coding");
        assert_eq!(hits[0].matched, vec![SearchKey::Tags]);
        assert!((hits[0].score - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_tags_are_skipped() {
        let articles = vec![article("t", "Zed", &["", "coding"], "")];
        let hits = search_articles(&articles, "coding");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].matched, vec![SearchKey::Tags]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let articles = vec![
            article("first", "Cursor", &[], ""),
            article("second", "Cursor", &[], ""),
        ];
        let hits = search_articles(&articles, "cursor");
        assert_eq!(hits[0].article.slug, "first");
        assert_eq!(hits[1].article.slug, "second");
    }
}

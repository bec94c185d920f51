//! Category aggregation over a [`ContentSource`].

use futures::future::join_all;
use ryder_config::ContentConfig;
use ryder_core::entities::Article;
use ryder_core::enums::Category;
use ryder_github::{ContentSource, DirEntry, EntryKind, GitHubError, RepoRef};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::frontmatter::split_frontmatter;
use crate::validate::validate_article;

/// Number of valid articles in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: Category,
    pub count: usize,
}

/// Entry point for every content operation.
///
/// Holds no state besides the injected source, so every call reads the
/// repository again.
pub struct ContentLibrary<S> {
    source: S,
    repo: RepoRef,
    layout: ContentConfig,
}

impl<S: ContentSource> ContentLibrary<S> {
    pub const fn new(source: S, repo: RepoRef, layout: ContentConfig) -> Self {
        Self {
            source,
            repo,
            layout,
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn repo(&self) -> &RepoRef {
        &self.repo
    }

    pub const fn layout(&self) -> &ContentConfig {
        &self.layout
    }

    /// Fetch and validate every article of one category, in listing order.
    ///
    /// A missing category folder yields an empty list. Files that fail to
    /// fetch, decode, parse or validate are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Source`] when listing fails for a reason other
    /// than absence, or when any file fetch hits a systemic failure.
    pub async fn fetch_category_articles(
        &self,
        category: Category,
    ) -> Result<Vec<Article>, ContentError> {
        let dir = self.layout.category_path(category);
        let entries = match self.source.list_directory(&self.repo, &dir).await {
            Ok(entries) => entries,
            Err(e @ (GitHubError::NotFound { .. } | GitHubError::NotADirectory { .. })) => {
                tracing::debug!(%category, error = %e, "category folder unavailable");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let candidates: Vec<&DirEntry> = entries
            .iter()
            .filter(|entry| self.is_article_candidate(entry))
            .collect();
        tracing::debug!(
            %category,
            listed = entries.len(),
            candidates = candidates.len(),
            "loading category"
        );

        let results = join_all(candidates.iter().map(|entry| self.load_article(&entry.path))).await;

        let mut articles = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(article) => articles.push(article),
                Err(e) if e.is_systemic() => return Err(e),
                Err(e) => tracing::warn!(%category, error = %e, "skipping article"),
            }
        }
        Ok(articles)
    }

    /// Fetch, decode, split and validate the markdown file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the first failure of the pipeline for this one file.
    pub async fn load_article(&self, path: &str) -> Result<Article, ContentError> {
        let file = self.source.get_file(&self.repo, path).await?;
        let raw = file.decode()?;
        let document = split_frontmatter(&raw).map_err(|reason| ContentError::Frontmatter {
            path: path.to_string(),
            reason,
        })?;
        let frontmatter =
            validate_article(&document.metadata).map_err(|violations| ContentError::Invalid {
                path: path.to_string(),
                violations,
            })?;
        Ok(Article::from_parts(frontmatter, &document.body, path))
    }

    /// All articles of all categories, concatenated in category order.
    ///
    /// # Errors
    ///
    /// Propagates the first category failure.
    pub async fn fetch_all_articles(&self) -> Result<Vec<Article>, ContentError> {
        let per_category =
            join_all(Category::ALL.map(|category| self.fetch_category_articles(category))).await;

        let mut all = Vec::new();
        for articles in per_category {
            all.extend(articles?);
        }
        Ok(all)
    }

    /// Article counts per category, in category order.
    ///
    /// # Errors
    ///
    /// Propagates the first category failure.
    pub async fn fetch_categories(&self) -> Result<Vec<CategorySummary>, ContentError> {
        let counts = join_all(Category::ALL.map(|category| async move {
            self.fetch_category_articles(category)
                .await
                .map(|articles| CategorySummary {
                    name: category,
                    count: articles.len(),
                })
        }))
        .await;
        counts.into_iter().collect()
    }

    /// First article with `slug` in `category`.
    ///
    /// # Errors
    ///
    /// Propagates category fetch failures.
    pub async fn find_article(
        &self,
        category: Category,
        slug: &str,
    ) -> Result<Option<Article>, ContentError> {
        let articles = self.fetch_category_articles(category).await?;
        Ok(articles.into_iter().find(|a| a.slug == slug))
    }

    /// Like [`Self::find_article`], with the category given by name.
    ///
    /// Unknown category names resolve to `None`.
    ///
    /// # Errors
    ///
    /// Propagates category fetch failures.
    pub async fn find_article_by_name(
        &self,
        category: &str,
        slug: &str,
    ) -> Result<Option<Article>, ContentError> {
        let Ok(category) = category.parse::<Category>() else {
            tracing::debug!(category, "unknown category");
            return Ok(None);
        };
        self.find_article(category, slug).await
    }

    /// Every `(category, slug)` pair, in category then listing order.
    ///
    /// # Errors
    ///
    /// Propagates category fetch failures.
    pub async fn article_addresses(&self) -> Result<Vec<(Category, String)>, ContentError> {
        Ok(self
            .fetch_all_articles()
            .await?
            .into_iter()
            .map(|a| (a.category, a.slug))
            .collect())
    }

    fn is_article_candidate(&self, entry: &DirEntry) -> bool {
        entry.kind == EntryKind::File
            && entry.name.ends_with(".md")
            && !self.layout.is_excluded_file(&entry.name)
            && !self.layout.is_excluded_path(&entry.path)
    }
}

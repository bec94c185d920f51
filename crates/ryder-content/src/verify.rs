//! End-to-end pipeline check against the live content source.

use ryder_core::entities::Article;
use ryder_core::enums::Category;
use ryder_github::{ContentSource, RateLimitMode};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ContentError;
use crate::library::{CategorySummary, ContentLibrary};

const SAMPLE_TITLES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub passed: bool,
    pub message: String,
}

impl Check {
    fn new(passed: bool, message: impl Into<String>) -> Self {
        Self {
            passed,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyChecks {
    pub authentication: Check,
    pub all_categories_present: Check,
    pub no_excluded_paths: Check,
}

impl VerifyChecks {
    fn all_passed(&self) -> bool {
        self.authentication.passed
            && self.all_categories_present.passed
            && self.no_excluded_paths.passed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyStats {
    pub total_articles: usize,
    pub categories: Vec<CategorySummary>,
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySample {
    pub category: Category,
    pub count: usize,
    pub sample_titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub success: bool,
    pub duration_ms: u64,
    pub stats: VerifyStats,
    pub checks: VerifyChecks,
    pub samples: Vec<CategorySample>,
}

impl<S: ContentSource> ContentLibrary<S> {
    /// Run the whole pipeline once and report what came back.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures; a failed check is reported, not raised.
    pub async fn verify(&self) -> Result<VerifyReport, ContentError> {
        let started = Instant::now();
        let authenticated = self.source().rate_limit_mode() == RateLimitMode::Authenticated;

        let (articles, categories) =
            tokio::join!(self.fetch_all_articles(), self.fetch_categories());
        let (articles, categories) = (articles?, categories?);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let checks = VerifyChecks {
            authentication: Check::new(
                authenticated,
                if authenticated {
                    "authenticated"
                } else {
                    "unauthenticated (limited rate)"
                },
            ),
            all_categories_present: categories_check(&categories),
            no_excluded_paths: self.excluded_paths_check(&articles),
        };

        let report = VerifyReport {
            success: checks.all_passed(),
            duration_ms,
            stats: VerifyStats {
                total_articles: articles.len(),
                categories: categories.clone(),
                authenticated,
            },
            checks,
            samples: samples(&categories, &articles),
        };
        tracing::info!(
            success = report.success,
            total = report.stats.total_articles,
            duration_ms,
            "verification finished"
        );
        Ok(report)
    }

    fn excluded_paths_check(&self, articles: &[Article]) -> Check {
        let leaked = articles
            .iter()
            .filter(|a| self.layout().is_excluded_path(&a.path))
            .count();
        Check::new(leaked == 0, format!("{leaked} articles under excluded paths"))
    }
}

fn categories_check(categories: &[CategorySummary]) -> Check {
    let missing: Vec<&str> = Category::ALL
        .iter()
        .filter(|c| !categories.iter().any(|s| s.name == **c))
        .map(|c| c.as_str())
        .collect();
    if missing.is_empty() {
        Check::new(true, "all categories present")
    } else {
        Check::new(false, format!("missing: {}", missing.join(", ")))
    }
}

fn samples(categories: &[CategorySummary], articles: &[Article]) -> Vec<CategorySample> {
    categories
        .iter()
        .filter(|summary| summary.count > 0)
        .map(|summary| CategorySample {
            category: summary.name,
            count: summary.count,
            sample_titles: articles
                .iter()
                .filter(|a| a.category == summary.name)
                .take(SAMPLE_TITLES)
                .map(|a| a.title.clone())
                .collect(),
        })
        .collect()
}

//! Layout of the content repository.

use ryder_core::enums::Category;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_path() -> String {
    String::from("docs")
}

fn default_exclude_paths() -> Vec<String> {
    vec![
        String::from("docs/_templates"),
        String::from("docs/_index"),
    ]
}

fn default_excluded_files() -> Vec<String> {
    vec![String::from("README.md"), String::from(".gitkeep")]
}

fn default_leaderboard_path() -> String {
    String::from("docs/_leaderboard/data.yaml")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory holding one folder per category.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Path prefixes whose files are never treated as articles.
    #[serde(default = "default_exclude_paths")]
    pub exclude_paths: Vec<String>,

    /// File names skipped inside category folders.
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    /// YAML file with the leaderboard `entries` list.
    #[serde(default = "default_leaderboard_path")]
    pub leaderboard_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            exclude_paths: default_exclude_paths(),
            excluded_files: default_excluded_files(),
            leaderboard_path: default_leaderboard_path(),
        }
    }
}

impl ContentConfig {
    /// Repository path of a category folder, e.g. `docs/tools`.
    #[must_use]
    pub fn category_path(&self, category: Category) -> String {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            category.as_str().to_string()
        } else {
            format!("{base}/{category}")
        }
    }

    /// Whether `path` falls under one of the excluded prefixes.
    #[must_use]
    pub fn is_excluded_path(&self, path: &str) -> bool {
        self.exclude_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    #[must_use]
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_files.iter().any(|f| f == name)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard_path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "content.leaderboard_path",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_repository_layout() {
        let config = ContentConfig::default();
        assert_eq!(config.category_path(Category::Tools), "docs/tools");
        assert_eq!(config.leaderboard_path, "docs/_leaderboard/data.yaml");
        assert!(config.is_excluded_file("README.md"));
        assert!(config.is_excluded_file(".gitkeep"));
        assert!(!config.is_excluded_file("cursor.md"));
    }

    #[test]
    fn excluded_paths_match_by_prefix() {
        let config = ContentConfig::default();
        assert!(config.is_excluded_path("docs/_templates/article.md"));
        assert!(config.is_excluded_path("docs/_index/scratch.md"));
        assert!(!config.is_excluded_path("docs/tools/cursor.md"));
    }

    #[test]
    fn trailing_slash_in_base_path_is_ignored() {
        let config = ContentConfig {
            base_path: "content/".into(),
            ..Default::default()
        };
        assert_eq!(config.category_path(Category::Models), "content/models");
    }
}

//! Leaderboard loading and grouping.
//!
//! The registry lives in one YAML file with an `entries` sequence. Entries
//! are validated one by one; a bad entry never hides the rest.

use ryder_core::entities::LeaderboardEntry;
use ryder_core::enums::{EntryStatus, EntryType, Subcategory};
use ryder_github::{ContentSource, GitHubError};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::error::ContentError;
use crate::frontmatter::kind_name;
use crate::library::ContentLibrary;
use crate::validate::validate_leaderboard_entry;

/// Entries of one subcategory, ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryGroup {
    pub subcategory: Subcategory,
    pub label: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// Entries of one type, split by subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeGroup {
    pub entry_type: EntryType,
    pub label: String,
    pub icon: String,
    pub subcategories: Vec<SubcategoryGroup>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardTotals {
    pub entries: usize,
    pub used: usize,
    pub researched: usize,
}

impl LeaderboardTotals {
    #[must_use]
    pub fn count(entries: &[LeaderboardEntry]) -> Self {
        let used = entries
            .iter()
            .filter(|e| e.status == EntryStatus::Used)
            .count();
        Self {
            entries: entries.len(),
            used,
            researched: entries.len() - used,
        }
    }
}

/// Grouped entries plus totals, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardView {
    pub groups: Vec<TypeGroup>,
    pub totals: LeaderboardTotals,
}

/// Parse leaderboard YAML into validated entries.
///
/// A document that is empty, not a mapping, or lacks a non-empty `entries`
/// sequence yields no entries. Invalid entries are logged and dropped.
///
/// # Errors
///
/// Returns [`ContentError::Yaml`] when the text is not valid YAML.
pub fn parse_leaderboard(text: &str, path: &str) -> Result<Vec<LeaderboardEntry>, ContentError> {
    let document: Value = serde_yaml::from_str(text).map_err(|e| ContentError::Yaml {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let Some(map) = document.as_mapping() else {
        if !document.is_null() {
            tracing::warn!(path, found = kind_name(&document), "leaderboard is not a mapping");
        }
        return Ok(Vec::new());
    };
    let Some(items) = map.get("entries").and_then(Value::as_sequence) else {
        tracing::debug!(path, "leaderboard has no entries sequence");
        return Ok(Vec::new());
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match validate_leaderboard_entry(item) {
            Ok(entry) => entries.push(entry),
            Err(violations) => {
                let name = item.get("name").and_then(Value::as_str).unwrap_or("?");
                tracing::warn!(path, index, name, %violations, "skipping leaderboard entry");
            }
        }
    }
    Ok(entries)
}

/// Group entries by type (display order), then subcategory (key order), then
/// rank ascending. Equal ranks keep input order.
#[must_use]
pub fn group_leaderboard(entries: &[LeaderboardEntry]) -> Vec<TypeGroup> {
    let mut by_type: BTreeMap<u8, (EntryType, BTreeMap<&'static str, Vec<LeaderboardEntry>>)> =
        BTreeMap::new();
    for entry in entries {
        by_type
            .entry(entry.entry_type.display_order())
            .or_insert_with(|| (entry.entry_type, BTreeMap::new()))
            .1
            .entry(entry.subcategory.as_str())
            .or_default()
            .push(entry.clone());
    }

    by_type
        .into_values()
        .map(|(entry_type, subs)| TypeGroup {
            entry_type,
            label: entry_type.label().to_string(),
            icon: entry_type.icon().to_string(),
            subcategories: subs
                .into_values()
                .filter_map(|mut entries| {
                    entries.sort_by_key(|e| e.rank);
                    let subcategory = entries.first()?.subcategory;
                    Some(SubcategoryGroup {
                        subcategory,
                        label: subcategory.label().to_string(),
                        entries,
                    })
                })
                .collect(),
        })
        .collect()
}

#[must_use]
pub fn leaderboard_view(entries: &[LeaderboardEntry]) -> LeaderboardView {
    LeaderboardView {
        groups: group_leaderboard(entries),
        totals: LeaderboardTotals::count(entries),
    }
}

/// Turn a data-file relative doc link into an article route.
///
/// `../tools/cursor.md` becomes `/tools/cursor`. Anything that does not
/// reduce to exactly two non-empty segments yields `None`.
#[must_use]
pub fn resolve_doc_link(link: &str) -> Option<String> {
    let trimmed = link.strip_prefix("../").unwrap_or(link);
    let trimmed = trimmed.strip_suffix(".md").unwrap_or(trimmed);
    match trimmed.split('/').collect::<Vec<_>>().as_slice() {
        [category, slug] if !category.is_empty() && !slug.is_empty() => {
            Some(format!("/{category}/{slug}"))
        }
        _ => None,
    }
}

impl<S: ContentSource> ContentLibrary<S> {
    /// Fetch and validate the leaderboard registry.
    ///
    /// A missing data file yields no entries.
    ///
    /// # Errors
    ///
    /// Propagates source failures other than absence, decode failures and
    /// malformed YAML.
    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ContentError> {
        let path = self.layout().leaderboard_path.as_str();
        let file = match self.source().get_file(self.repo(), path).await {
            Ok(file) => file,
            Err(e @ (GitHubError::NotFound { .. } | GitHubError::NotAFile { .. })) => {
                tracing::debug!(path, error = %e, "leaderboard unavailable");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        parse_leaderboard(&file.decode()?, path)
    }

    /// # Errors
    ///
    /// See [`Self::fetch_leaderboard`].
    pub async fn leaderboard_view(&self) -> Result<LeaderboardView, ContentError> {
        Ok(leaderboard_view(&self.fetch_leaderboard().await?))
    }
}

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntryStatus, EntryType, Subcategory};

/// One ranked row of the leaderboard registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub subcategory: Subcategory,
    pub status: EntryStatus,
    /// Position within the subcategory, 1 being best. Ties are allowed.
    pub rank: u32,
    pub use_case: String,
    pub verdict: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub where_used: Option<String>,
    /// Link relative to the leaderboard data file, e.g. `../tools/cursor.md`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_link: Option<String>,
    pub date_added: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

//! Schema validation for article frontmatter and leaderboard entries.
//!
//! Every field is checked and every violation recorded, so a rejected
//! document can be reported in one log line. Dates accept YAML timestamps
//! and ISO strings (`2025-01-31`, `2025-01-31T10:00:00Z`,
//! `2025-01-31 10:00:00`) and are coerced to UTC; date-only values become
//! midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ryder_core::entities::{ArticleFrontmatter, LeaderboardEntry};
use ryder_core::enums::{ArticleStatus, Category, EntryStatus, EntryType, Subcategory};
use ryder_core::validation::{FieldViolation, Violations};
use serde_yaml::{Mapping, Value};
use std::str::FromStr;

use crate::frontmatter::kind_name;

/// Validate a frontmatter mapping against the article schema.
///
/// `tags` may be absent (empty list); every other field is required.
///
/// # Errors
///
/// Returns all field violations found.
pub fn validate_article(metadata: &Mapping) -> Result<ArticleFrontmatter, Violations> {
    let mut f = Fields::new(metadata);

    let title = f.non_empty_string("title");
    let status = f.choice::<ArticleStatus>("status", &ArticleStatus::ALL.map(ArticleStatus::as_str));
    let category = f.choice::<Category>("category", &Category::ALL.map(Category::as_str));
    let slug = f.string("slug");
    let created = f.date("created");
    let updated = f.date("updated");
    let author = f.string("author");
    let tags = f.string_list("tags");

    match (title, status, category, slug, created, updated, author) {
        (
            Some(title),
            Some(status),
            Some(category),
            Some(slug),
            Some(created),
            Some(updated),
            Some(author),
        ) => f.violations.into_result(|| ArticleFrontmatter {
            title,
            status,
            category,
            slug,
            created,
            updated,
            author,
            tags,
        }),
        _ => Err(f.violations),
    }
}

/// Validate one raw item of the leaderboard `entries` sequence.
///
/// # Errors
///
/// Returns all field violations found, or a single violation when the item
/// is not a mapping.
pub fn validate_leaderboard_entry(raw: &Value) -> Result<LeaderboardEntry, Violations> {
    let Some(map) = raw.as_mapping() else {
        return Err(Violations::from(vec![FieldViolation::new(
            "entry",
            format!("expected a mapping, found {}", kind_name(raw)),
        )]));
    };
    let mut f = Fields::new(map);

    let name = f.string("name");
    let entry_type = f.choice::<EntryType>("type", &EntryType::ALL.map(EntryType::as_str));
    let subcategory =
        f.choice::<Subcategory>("subcategory", &Subcategory::ALL.map(Subcategory::as_str));
    let status = f.choice::<EntryStatus>("status", &EntryStatus::ALL.map(EntryStatus::as_str));
    let rank = f.positive_int("rank");
    let use_case = f.string("use_case");
    let verdict = f.string("verdict");
    let where_used = f.optional_string("where_used");
    let doc_link = f.optional_string("doc_link");
    let date_added = f.date("date_added");
    let date_updated = f.date("date_updated");

    match (
        name,
        entry_type,
        subcategory,
        status,
        rank,
        use_case,
        verdict,
        date_added,
        date_updated,
    ) {
        (
            Some(name),
            Some(entry_type),
            Some(subcategory),
            Some(status),
            Some(rank),
            Some(use_case),
            Some(verdict),
            Some(date_added),
            Some(date_updated),
        ) => f.violations.into_result(|| LeaderboardEntry {
            name,
            entry_type,
            subcategory,
            status,
            rank,
            use_case,
            verdict,
            where_used,
            doc_link,
            date_added,
            date_updated,
        }),
        _ => Err(f.violations),
    }
}

/// Coerce a YAML scalar into a UTC timestamp.
#[must_use]
pub fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Tagged(tagged) => coerce_date(&tagged.value),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Field reader that records a violation for every failed lookup.
struct Fields<'a> {
    map: &'a Mapping,
    violations: Violations,
}

impl<'a> Fields<'a> {
    const fn new(map: &'a Mapping) -> Self {
        Self {
            map,
            violations: Violations::new(),
        }
    }

    /// Present, non-null value for `key`.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn fail(&mut self, key: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(key, message));
    }

    fn required(&mut self, key: &str) -> Option<&'a Value> {
        let value = self.get(key);
        if value.is_none() {
            self.violations.push(FieldViolation::missing(key));
        }
        value
    }

    fn string(&mut self, key: &str) -> Option<String> {
        let value = self.required(key)?;
        if let Some(s) = value.as_str() {
            Some(s.to_string())
        } else {
            self.fail(key, format!("expected string, found {}", kind_name(value)));
            None
        }
    }

    fn non_empty_string(&mut self, key: &str) -> Option<String> {
        let s = self.string(key)?;
        if s.trim().is_empty() {
            self.fail(key, "must not be empty");
            return None;
        }
        Some(s)
    }

    fn optional_string(&mut self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        if let Some(s) = value.as_str() {
            Some(s.to_string())
        } else {
            self.fail(key, format!("expected string, found {}", kind_name(value)));
            None
        }
    }

    fn choice<T: FromStr>(&mut self, key: &str, allowed: &[&str]) -> Option<T> {
        let raw = self.string(key)?;
        if let Ok(parsed) = raw.parse::<T>() {
            Some(parsed)
        } else {
            self.fail(
                key,
                format!("expected one of {}, found '{raw}'", allowed.join(", ")),
            );
            None
        }
    }

    fn date(&mut self, key: &str) -> Option<DateTime<Utc>> {
        let value = self.required(key)?;
        let date = coerce_date(value);
        if date.is_none() {
            self.fail(key, "expected a date (YYYY-MM-DD or RFC 3339)");
        }
        date
    }

    // the float branch is range-checked before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn positive_int(&mut self, key: &str) -> Option<u32> {
        let value = self.required(key)?;
        let parsed = match value {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u64)
            }),
            _ => None,
        };
        match parsed.and_then(|n| u32::try_from(n).ok()).filter(|n| *n > 0) {
            Some(n) => Some(n),
            None => {
                self.fail(key, "expected a positive integer");
                None
            }
        }
    }

    /// Optional list of strings; absent or null means empty.
    fn string_list(&mut self, key: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };
        let Some(items) = value.as_sequence() else {
            self.fail(key, format!("expected a list of strings, found {}", kind_name(value)));
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(s) => out.push(s.to_string()),
                None => self.fail(
                    &format!("{key}[{i}]"),
                    format!("expected string, found {}", kind_name(item)),
                ),
            }
        }
        out
    }
}

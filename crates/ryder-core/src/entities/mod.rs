//! Entity structs for Ryder's two content kinds.
//!
//! Both are rebuilt from the content repository on every fetch; they carry no
//! identity beyond their field values.

mod article;
mod leaderboard;

pub use article::{Article, ArticleFrontmatter};
pub use leaderboard::LeaderboardEntry;

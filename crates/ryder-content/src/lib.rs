//! # ryder-content
//!
//! Turns the content repository into validated articles and the views built
//! on top of them.
//!
//! Pipeline: directory listing → per-file fetch → frontmatter split → schema
//! validation → aggregation. Derived views (tags, leaderboard, table of
//! contents, search, verification) are computed from freshly fetched data on
//! every call; nothing is cached between calls.
//!
//! All repository-backed operations hang off [`ContentLibrary`], which is
//! generic over the [`ryder_github::ContentSource`] transport. The pure
//! functions in [`tags`], [`leaderboard`], [`toc`] and [`search`] work on
//! already-fetched data.

pub mod error;
pub mod frontmatter;
pub mod leaderboard;
pub mod library;
pub mod search;
pub mod tags;
pub mod toc;
pub mod validate;
pub mod verify;

pub use error::ContentError;
pub use library::{CategorySummary, ContentLibrary};

//! # ryder-core
//!
//! Core types shared across all Ryder crates:
//! - Entity structs for the two content kinds (articles, leaderboard entries)
//! - Closed-set enums with their display metadata
//! - Field-level validation results
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;

//! # sideout-types
//!
//! Shared types, errors, and configuration for the **SideOut** scoreboard engine.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`TeamId`], [`MatchId`]
//! - **Team model**: [`Team`], [`TeamColor`], [`TeamPatch`]
//! - **Rules model**: [`GameMode`], [`GameRules`], [`RulesPatch`]
//! - **History model**: [`HistoryEntry`]
//! - **Configuration**: [`ScoreboardConfig`], [`TeamConfig`], [`GestureConfig`]
//! - **Errors**: [`SideoutError`] with `SO_ERR_` prefix codes
//! - **Constants**: rule defaults, input bounds, gesture thresholds

pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod ids;
pub mod rules;
pub mod team;

// Re-export all primary types at crate root for ergonomic imports:
//   use sideout_types::{TeamId, Team, GameRules, GameMode, ...};

pub use config::*;
pub use error::*;
pub use history::*;
pub use ids::*;
pub use rules::*;
pub use team::*;

// Constants are accessed via `sideout_types::constants::FOO`
// (not re-exported to avoid name collisions).

//! # sideout-matchcore
//!
//! **Pure match state machine for SideOut.**
//!
//! MatchCore is the only part of the scoreboard with real rules: how a point
//! changes the score, when a set is decided, which target applies in the
//! deciding set, and when beach teams change ends. It has:
//!
//! - **Zero side effects**: no I/O, no timers, no global state
//! - **No failure modes**: invalid operations are no-ops reported in outcomes
//! - **One record**: all progress lives in a single [`MatchState`]

pub mod engine;
pub mod history;
pub mod rules;
pub mod state;

pub use engine::{MatchEngine, PointOutcome, Rejection, Transition};
pub use history::HistoryStack;
pub use state::{MatchState, SetPhase};

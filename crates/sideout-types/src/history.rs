//! Undo snapshots.

use serde::{Deserialize, Serialize};

use crate::TeamId;

/// Scores and server captured immediately before a scoring mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub team1_score: u32,
    pub team2_score: u32,
    pub serving_team: TeamId,
}

impl HistoryEntry {
    /// The captured score for one side.
    #[must_use]
    pub fn score(&self, team: TeamId) -> u32 {
        match team {
            TeamId::Team1 => self.team1_score,
            TeamId::Team2 => self.team2_score,
        }
    }
}

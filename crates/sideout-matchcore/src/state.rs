//! The match record: the only state the engine owns.
//!
//! Every engine operation is a transition over one [`MatchState`]. There is
//! no global state; a second scoreboard is just a second record.

use std::fmt;

use serde::{Deserialize, Serialize};
use sideout_types::{GameMode, GameRules, MatchId, Team, TeamId};

use crate::history::HistoryStack;

/// Where the current set stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SetPhase {
    /// Rallies are being played; scoring is allowed.
    InProgress,
    /// A win condition was met. Scoring is frozen until the next set or a reset.
    Concluded { winner: TeamId },
}

impl SetPhase {
    #[must_use]
    pub fn is_concluded(self) -> bool {
        matches!(self, Self::Concluded { .. })
    }

    #[must_use]
    pub fn winner(self) -> Option<TeamId> {
        match self {
            Self::InProgress => None,
            Self::Concluded { winner } => Some(winner),
        }
    }
}

impl fmt::Display for SetPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Concluded { winner } => write!(f, "CONCLUDED({winner})"),
        }
    }
}

/// Complete state of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Session identifier, carried on log records.
    pub match_id: MatchId,
    /// Indoor or beach; fixed for the session.
    pub mode: GameMode,
    /// Scoring thresholds.
    pub rules: GameRules,
    pub team1: Team,
    pub team2: Team,
    /// Team currently serving.
    pub serving_team: TeamId,
    /// Progress of the current set.
    pub phase: SetPhase,
    /// Winner of each completed set, in order.
    pub sets_won: Vec<TeamId>,
    /// Undo snapshots for the current set.
    pub history: HistoryStack,
}

impl MatchState {
    /// Fresh match with default teams and the standard rules for `mode`.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::with_rules(mode, GameRules::for_mode(mode))
    }

    /// Fresh match with default teams and explicit rules.
    #[must_use]
    pub fn with_rules(mode: GameMode, rules: GameRules) -> Self {
        Self {
            match_id: MatchId::new(),
            mode,
            rules,
            team1: Team::default_for(TeamId::Team1),
            team2: Team::default_for(TeamId::Team2),
            serving_team: TeamId::Team1,
            phase: SetPhase::InProgress,
            sets_won: Vec::new(),
            history: HistoryStack::new(),
        }
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::Team1 => &mut self.team1,
            TeamId::Team2 => &mut self.team2,
        }
    }

    /// `(team1, team2)` scores.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.team1.score, self.team2.score)
    }

    /// Zero both scores, give the serve to team 1, drop undo history and
    /// reopen the set. Set results are left alone.
    pub(crate) fn clear_set(&mut self) {
        self.team1.score = 0;
        self.team2.score = 0;
        self.serving_team = TeamId::Team1;
        self.history.clear();
        self.phase = SetPhase::InProgress;
    }
}

//! Game mode and the configurable scoring rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Indoor or beach volleyball. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    Volleyball,
    BeachVolleyball,
}

impl GameMode {
    /// Maximum number of sets in a match (best-of-N).
    #[must_use]
    pub fn max_sets(self) -> usize {
        match self {
            Self::Volleyball => constants::VOLLEYBALL_MAX_SETS,
            Self::BeachVolleyball => constants::BEACH_MAX_SETS,
        }
    }

    /// Sets a team must win to take the match.
    #[must_use]
    pub fn sets_to_win(self) -> usize {
        self.max_sets() / 2 + 1
    }

    /// Sets each team holds when the deciding set is reached (2-2 or 1-1).
    #[must_use]
    pub fn tiebreak_sets_each(self) -> usize {
        (self.max_sets() - 1) / 2
    }

    /// Whether teams change ends during a set.
    #[must_use]
    pub fn switches_sides(self) -> bool {
        matches!(self, Self::BeachVolleyball)
    }

    /// Scoreboard header label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Volleyball => "Voleibol",
            Self::BeachVolleyball => "Vóley Playa",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volleyball => write!(f, "volleyball"),
            Self::BeachVolleyball => write!(f, "beach-volleyball"),
        }
    }
}

/// Scoring thresholds for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Points needed to win a regular set.
    pub points_to_win: u32,
    /// Points needed to win the deciding set.
    pub tiebreak_points: u32,
    /// Combined-points interval between side switches (beach only).
    pub switch_sides: u32,
}

impl GameRules {
    /// Standard rules for the given mode.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Volleyball => Self {
                points_to_win: constants::VOLLEYBALL_POINTS_TO_WIN,
                tiebreak_points: constants::VOLLEYBALL_TIEBREAK_POINTS,
                switch_sides: constants::VOLLEYBALL_SWITCH_SIDES,
            },
            GameMode::BeachVolleyball => Self {
                points_to_win: constants::BEACH_POINTS_TO_WIN,
                tiebreak_points: constants::BEACH_TIEBREAK_POINTS,
                switch_sides: constants::BEACH_SWITCH_SIDES,
            },
        }
    }

    /// Shallow-merge the fields present in `patch`.
    pub fn apply(&mut self, patch: &RulesPatch) {
        if let Some(points) = patch.points_to_win {
            self.points_to_win = points;
        }
        if let Some(points) = patch.tiebreak_points {
            self.tiebreak_points = points;
        }
        if let Some(interval) = patch.switch_sides {
            self.switch_sides = interval;
        }
    }
}

/// Partial rules update coming out of the settings dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_to_win: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_sides: Option<u32>,
}

impl From<GameRules> for RulesPatch {
    fn from(rules: GameRules) -> Self {
        Self {
            points_to_win: Some(rules.points_to_win),
            tiebreak_points: Some(rules.tiebreak_points),
            switch_sides: Some(rules.switch_sides),
        }
    }
}

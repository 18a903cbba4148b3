//! Editable copy of team and rule settings.
//!
//! The settings dialog edits a [`SettingsDraft`]; nothing reaches the engine
//! until the draft validates and is turned into patches. Input bounds live
//! here, not in the engine.

use sideout_matchcore::MatchEngine;
use sideout_types::{
    GameMode, GameRules, Result, RulesPatch, SideoutError, TeamColor, TeamId, TeamPatch,
    constants,
};

/// Settings being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub mode: GameMode,
    pub team1_name: String,
    pub team1_color: TeamColor,
    pub team2_name: String,
    pub team2_color: TeamColor,
    pub rules: GameRules,
}

impl SettingsDraft {
    /// Start editing from the engine's current settings.
    #[must_use]
    pub fn from_engine(engine: &MatchEngine) -> Self {
        let team1 = engine.team(TeamId::Team1);
        let team2 = engine.team(TeamId::Team2);
        Self {
            mode: engine.mode(),
            team1_name: team1.name.clone(),
            team1_color: team1.color,
            team2_name: team2.name.clone(),
            team2_color: team2.color,
            rules: *engine.rules(),
        }
    }

    pub fn set_name(&mut self, team: TeamId, name: impl Into<String>) {
        match team {
            TeamId::Team1 => self.team1_name = name.into(),
            TeamId::Team2 => self.team2_name = name.into(),
        }
    }

    pub fn set_color(&mut self, team: TeamId, color: TeamColor) {
        match team {
            TeamId::Team1 => self.team1_color = color,
            TeamId::Team2 => self.team2_color = color,
        }
    }

    /// Put the rule fields back to the standard values for the mode.
    /// Team names and colors are kept.
    pub fn reset_rules_to_defaults(&mut self) {
        self.rules = GameRules::for_mode(self.mode);
    }

    /// Check every field against the dialog's input bounds.
    pub fn validate(&self) -> Result<()> {
        check_range("points_to_win", self.rules.points_to_win, constants::POINTS_TO_WIN_RANGE)?;
        check_range(
            "tiebreak_points",
            self.rules.tiebreak_points,
            constants::TIEBREAK_POINTS_RANGE,
        )?;
        check_range("switch_sides", self.rules.switch_sides, constants::SWITCH_SIDES_RANGE)?;
        if self.team1_name.trim().is_empty() {
            return Err(SideoutError::EmptyTeamName(TeamId::Team1));
        }
        if self.team2_name.trim().is_empty() {
            return Err(SideoutError::EmptyTeamName(TeamId::Team2));
        }
        Ok(())
    }

    /// Validate and produce the patches for `MatchEngine::update_settings`.
    pub fn into_patches(self) -> Result<(TeamPatch, TeamPatch, RulesPatch)> {
        self.validate()?;
        Ok((
            TeamPatch {
                name: Some(self.team1_name.trim().to_string()),
                color: Some(self.team1_color),
            },
            TeamPatch {
                name: Some(self.team2_name.trim().to_string()),
                color: Some(self.team2_color),
            },
            RulesPatch::from(self.rules),
        ))
    }
}

fn check_range(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SideoutError::RuleOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

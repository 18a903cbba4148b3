//! Configuration for a scoreboard session.
//!
//! The embedding app hands over a JSON document (or builds the struct
//! directly). Every field is optional on the wire; omitted fields fall back
//! to the mode defaults.

use serde::{Deserialize, Serialize};

use crate::{
    GameMode, GameRules, Result, RulesPatch, SideoutError, Team, TeamColor, TeamId, constants,
};

/// Everything needed to open a scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Indoor or beach.
    pub mode: GameMode,
    /// Rule overrides applied on top of the standard rules for `mode`.
    pub rules: RulesPatch,
    pub team1: TeamConfig,
    pub team2: TeamConfig,
    /// Touch thresholds.
    pub gesture: GestureConfig,
    /// How long the side-switch alert stays visible.
    pub switch_alert_ms: u64,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self::for_mode(GameMode::Volleyball)
    }
}

impl ScoreboardConfig {
    /// Stock configuration for a mode.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode,
            rules: RulesPatch::default(),
            team1: TeamConfig::default_for(TeamId::Team1),
            team2: TeamConfig::default_for(TeamId::Team2),
            gesture: GestureConfig::default(),
            switch_alert_ms: constants::DEFAULT_SWITCH_ALERT_MS,
        }
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| SideoutError::Configuration(e.to_string()))?;
        cfg.gesture.check()?;
        Ok(cfg)
    }

    /// Rules in effect: the mode defaults with any overrides merged in.
    #[must_use]
    pub fn effective_rules(&self) -> GameRules {
        let mut rules = GameRules::for_mode(self.mode);
        rules.apply(&self.rules);
        rules
    }

    /// Config for one side.
    #[must_use]
    pub fn team(&self, id: TeamId) -> &TeamConfig {
        match id {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }
}

/// Name and color a team starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub color: TeamColor,
}

impl TeamConfig {
    #[must_use]
    pub fn default_for(id: TeamId) -> Self {
        let team = Team::default_for(id);
        Self {
            name: team.name,
            color: team.color,
        }
    }

    #[must_use]
    pub fn to_team(&self) -> Team {
        Team::new(self.name.clone(), self.color)
    }
}

/// Thresholds used to tell taps from downward swipes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum downward travel (px) for a swipe.
    pub swipe_distance_px: f32,
    /// Maximum duration (ms) of a swipe.
    pub swipe_window_ms: u64,
    /// Maximum travel (px) for a tap.
    pub tap_slop_px: f32,
    /// Travel (px) after which the subtract hint is shown.
    pub subtract_hint_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_distance_px: constants::DEFAULT_SWIPE_DISTANCE_PX,
            swipe_window_ms: constants::DEFAULT_SWIPE_WINDOW_MS,
            tap_slop_px: constants::DEFAULT_TAP_SLOP_PX,
            subtract_hint_px: constants::DEFAULT_SUBTRACT_HINT_PX,
        }
    }
}

impl GestureConfig {
    /// Reject thresholds that would make taps and swipes overlap.
    pub fn check(&self) -> Result<()> {
        if !(self.swipe_distance_px.is_finite() && self.tap_slop_px.is_finite()) {
            return Err(SideoutError::Configuration(
                "gesture thresholds must be finite".to_string(),
            ));
        }
        if self.tap_slop_px < 0.0 || self.tap_slop_px > self.swipe_distance_px {
            return Err(SideoutError::Configuration(format!(
                "tap_slop_px ({}) must be within 0..={}",
                self.tap_slop_px, self.swipe_distance_px
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = ScoreboardConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ScoreboardConfig::default());
        assert_eq!(cfg.mode, GameMode::Volleyball);
        assert_eq!(cfg.switch_alert_ms, 3000);
        assert_eq!(cfg.gesture.swipe_window_ms, 500);
    }

    #[test]
    fn beach_mode_effective_rules() {
        let cfg = ScoreboardConfig::from_json(r#"{"mode":"beach-volleyball"}"#).unwrap();
        let rules = cfg.effective_rules();
        assert_eq!(rules.points_to_win, 21);
        assert_eq!(rules.switch_sides, 7);
    }

    #[test]
    fn rule_override_wins() {
        let cfg = ScoreboardConfig::from_json(
            r#"{"mode":"volleyball","rules":{"points_to_win":15,"tiebreak_points":11,"switch_sides":5}}"#,
        )
        .unwrap();
        assert_eq!(cfg.effective_rules().points_to_win, 15);
    }

    #[test]
    fn partial_rule_override_keeps_mode_defaults() {
        let cfg = ScoreboardConfig::from_json(
            r#"{"mode":"beach-volleyball","rules":{"points_to_win":15}}"#,
        )
        .unwrap();
        let rules = cfg.effective_rules();
        assert_eq!(rules.points_to_win, 15);
        assert_eq!(rules.tiebreak_points, 15);
        assert_eq!(rules.switch_sides, 7);
    }

    #[test]
    fn team_override() {
        let cfg = ScoreboardConfig::from_json(r#"{"team2":{"name":"Tiburones","color":"green"}}"#)
            .unwrap();
        assert_eq!(cfg.team(TeamId::Team2).name, "Tiburones");
        assert_eq!(cfg.team(TeamId::Team2).color, TeamColor::Green);
        assert_eq!(cfg.team(TeamId::Team1).name, "Equipo 1");
    }

    #[test]
    fn malformed_document_is_configuration_error() {
        let err = ScoreboardConfig::from_json(r#"{"mode":"tennis"}"#).unwrap_err();
        assert!(matches!(err, SideoutError::Configuration(_)));
    }

    #[test]
    fn overlapping_gesture_thresholds_rejected() {
        let err = ScoreboardConfig::from_json(
            r#"{"gesture":{"swipe_distance_px":10.0,"tap_slop_px":30.0}}"#,
        )
        .unwrap_err();
        assert!(format!("{err}").contains("SO_ERR_902"));
    }
}

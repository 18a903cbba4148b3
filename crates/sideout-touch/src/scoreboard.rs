//! Scoreboard controller.
//!
//! Owns one [`MatchEngine`] next to the ephemeral view state (touch tracker,
//! switch alert) and routes user input into engine calls:
//!
//! ```text
//! touch_start/move/end ─▶ GestureTracker ─▶ Tap ──────▶ add_point ─▶ SwitchAlert
//!                                         └▶ SwipeDown ─▶ subtract_point
//! buttons ─▶ undo / new set / reset / serve badge / settings
//! ```
//!
//! The engine never sees the view state; the view state never mutates the
//! engine except through its public operations.

use chrono::{DateTime, Utc};
use sideout_matchcore::{MatchEngine, PointOutcome, Transition};
use sideout_types::{Result, RulesPatch, ScoreboardConfig, TeamId, TeamPatch, constants};

use crate::{
    alert::SwitchAlert,
    gesture::{Gesture, GestureTracker},
    settings::SettingsDraft,
    view::ScoreboardView,
};

/// A running scoreboard session.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    engine: MatchEngine,
    gestures: GestureTracker,
    alert: SwitchAlert,
}

impl Scoreboard {
    /// Open a scoreboard from configuration.
    #[must_use]
    pub fn new(config: &ScoreboardConfig) -> Self {
        let mut engine = MatchEngine::with_rules(config.mode, config.effective_rules());
        let patch = |id: TeamId| {
            let team = config.team(id);
            TeamPatch {
                name: Some(team.name.clone()),
                color: Some(team.color),
            }
        };
        engine.update_settings(
            &patch(TeamId::Team1),
            &patch(TeamId::Team2),
            &RulesPatch::default(),
        );

        tracing::info!(
            engine = constants::ENGINE_NAME,
            version = constants::VERSION,
            match_id = %engine.match_id(),
            mode = %config.mode,
            "Scoreboard opened"
        );

        Self {
            engine,
            gestures: GestureTracker::new(config.gesture),
            alert: SwitchAlert::new(config.switch_alert_ms),
        }
    }

    // =================================================================
    // Touch input
    // =================================================================

    /// Finger down on a panel. Ignored while the set-end modal is up.
    pub fn touch_start(&mut self, team: TeamId, y: f32, at: DateTime<Utc>) {
        if self.engine.is_concluded() {
            return;
        }
        self.gestures.touch_start(team, y, at);
    }

    pub fn touch_move(&mut self, y: f32) {
        if self.engine.is_concluded() {
            return;
        }
        self.gestures.touch_move(y);
    }

    /// Finger up: classify and dispatch. Returns the recognised gesture.
    pub fn touch_end(&mut self, at: DateTime<Utc>) -> Option<Gesture> {
        if self.engine.is_concluded() {
            self.gestures.cancel();
            return None;
        }
        let gesture = self.gestures.touch_end(at)?;
        tracing::trace!(
            match_id = %self.engine.match_id(),
            team = %gesture.team(),
            ?gesture,
            "Gesture recognised"
        );
        match gesture {
            Gesture::Tap(team) => {
                self.add_point(team, at);
            }
            Gesture::SwipeDown(team) => {
                self.subtract_point(team);
            }
        }
        Some(gesture)
    }

    pub fn touch_cancel(&mut self) {
        self.gestures.cancel();
    }

    // =================================================================
    // Match operations
    // =================================================================

    /// Award a point and raise the switch alert when due.
    pub fn add_point(&mut self, team: TeamId, at: DateTime<Utc>) -> PointOutcome {
        let outcome = self.engine.add_point(team);
        if outcome.switch_sides() {
            self.alert.raise(at);
        }
        outcome
    }

    pub fn subtract_point(&mut self, team: TeamId) -> Transition {
        self.engine.subtract_point(team)
    }

    pub fn undo_last_point(&mut self) -> Transition {
        self.engine.undo_last_point()
    }

    /// Serve badge tapped.
    pub fn set_serving_team(&mut self, team: TeamId) -> Transition {
        self.engine.set_serving_team(team)
    }

    pub fn start_new_set(&mut self) -> Transition {
        self.engine.start_new_set()
    }

    pub fn reset_game(&mut self) {
        self.gestures.cancel();
        self.alert.clear();
        self.engine.reset_game();
    }

    /// Draft for the settings dialog.
    #[must_use]
    pub fn settings_draft(&self) -> SettingsDraft {
        SettingsDraft::from_engine(&self.engine)
    }

    /// Validate the dialog's draft and merge it into the match.
    pub fn apply_settings(&mut self, draft: SettingsDraft) -> Result<()> {
        let (team1, team2, rules) = draft.into_patches().inspect_err(|err| {
            tracing::warn!(match_id = %self.engine.match_id(), error = %err, "Settings rejected");
        })?;
        self.engine.update_settings(&team1, &team2, &rules);
        Ok(())
    }

    // =================================================================
    // Rendering
    // =================================================================

    /// Frame for `now`. Drops an expired switch alert on the way.
    pub fn view(&mut self, now: DateTime<Utc>) -> ScoreboardView {
        self.alert.expire(now);
        ScoreboardView::build(&self.engine, &self.gestures, self.alert.is_visible(now))
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    #[must_use]
    pub fn is_switch_alert_visible(&self, now: DateTime<Utc>) -> bool {
        self.alert.is_visible(now)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(&ScoreboardConfig::default())
    }
}

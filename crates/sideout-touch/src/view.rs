//! Render model.
//!
//! A [`ScoreboardView`] is everything a renderer needs for one frame,
//! derived from the engine plus the ephemeral touch and alert state. It is
//! rebuilt after every operation; it holds no state of its own.

use serde::Serialize;
use sideout_matchcore::MatchEngine;
use sideout_types::{GameMode, TeamId};

use crate::gesture::GestureTracker;

/// One slot of the per-team set strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetIndicator {
    /// This team won that set.
    Won,
    /// The set being played now.
    Current,
    /// Not yet played, or won by the other team.
    Empty,
}

/// Per-team panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPanel {
    pub team: TeamId,
    pub name: String,
    pub color_token: &'static str,
    pub score: u32,
    pub serving: bool,
    pub sets_won: usize,
    pub indicators: Vec<SetIndicator>,
    /// The "-1" overlay while a downward drag is in progress.
    pub subtract_hint: bool,
}

/// Tie-break banner under the mode badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TiebreakBanner {
    pub points: u32,
}

/// Modal shown once a set is won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetEndSummary {
    pub winner: TeamId,
    pub winner_name: String,
    pub team1_score: u32,
    pub team2_score: u32,
    /// Set tally including the set just won.
    pub team1_sets: usize,
    pub team2_sets: usize,
}

/// One frame of the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardView {
    pub mode: GameMode,
    pub mode_label: &'static str,
    pub set_number: usize,
    pub team1: TeamPanel,
    pub team2: TeamPanel,
    pub tiebreak: Option<TiebreakBanner>,
    pub set_end: Option<SetEndSummary>,
    pub switch_alert: bool,
    /// Panels ignore input while the set-end modal is up.
    pub input_locked: bool,
    pub can_undo: bool,
}

impl ScoreboardView {
    /// Build the frame for the engine's current state.
    #[must_use]
    pub fn build(engine: &MatchEngine, gestures: &GestureTracker, switch_alert: bool) -> Self {
        let tiebreak = engine.is_tiebreak().then(|| TiebreakBanner {
            points: engine.rules().tiebreak_points,
        });

        Self {
            mode: engine.mode(),
            mode_label: engine.mode().label(),
            set_number: engine.current_set_number(),
            team1: team_panel(engine, gestures, TeamId::Team1),
            team2: team_panel(engine, gestures, TeamId::Team2),
            tiebreak,
            set_end: set_end_summary(engine),
            switch_alert,
            input_locked: engine.is_concluded(),
            can_undo: engine.can_undo(),
        }
    }

    #[must_use]
    pub fn panel(&self, team: TeamId) -> &TeamPanel {
        match team {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }
}

/// Set strip for `team`: one slot per possible set.
#[must_use]
pub fn set_indicators(sets_won: &[TeamId], max_sets: usize, team: TeamId) -> Vec<SetIndicator> {
    (0..max_sets)
        .map(|i| match sets_won.get(i) {
            Some(&winner) if winner == team => SetIndicator::Won,
            None if i == sets_won.len() => SetIndicator::Current,
            _ => SetIndicator::Empty,
        })
        .collect()
}

fn team_panel(engine: &MatchEngine, gestures: &GestureTracker, id: TeamId) -> TeamPanel {
    let team = engine.team(id);
    TeamPanel {
        team: id,
        name: team.name.clone(),
        color_token: team.color.token(),
        score: team.score,
        serving: engine.serving_team() == id,
        sets_won: engine.sets_won_by(id),
        indicators: set_indicators(engine.sets_won(), engine.max_sets(), id),
        subtract_hint: !engine.is_concluded() && gestures.shows_subtract_hint(id),
    }
}

fn set_end_summary(engine: &MatchEngine) -> Option<SetEndSummary> {
    let winner = engine.set_winner()?;
    let pending = |team: TeamId| engine.sets_won_by(team) + usize::from(winner == team);
    let (team1_score, team2_score) = engine.scores();
    Some(SetEndSummary {
        winner,
        winner_name: engine.team(winner).name.clone(),
        team1_score,
        team2_score,
        team1_sets: pending(TeamId::Team1),
        team2_sets: pending(TeamId::Team2),
    })
}

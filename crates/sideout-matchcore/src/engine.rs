//! The match engine.
//!
//! `MatchEngine` owns one [`MatchState`] and exposes the operations a
//! scoreboard can trigger. Each operation is a pure transition: no I/O, no
//! timers, no errors. A call whose precondition does not hold leaves the
//! state untouched and reports [`Rejection`] in its outcome.
//!
//! ```text
//!              add_point (win)             start_new_set
//! InProgress ─────────────────▶ Concluded ──────────────▶ InProgress
//!      ▲                                                       │
//!      └──────────────────── reset_game (any state) ◀──────────┘
//! ```

use std::fmt;

use sideout_types::{
    GameMode, GameRules, HistoryEntry, MatchId, RulesPatch, Team, TeamId, TeamPatch,
};

use crate::{
    rules,
    state::{MatchState, SetPhase},
};

/// Why an operation had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The set is over; scoring waits for the next set or a reset.
    SetConcluded,
    /// There is nothing to undo in this set.
    HistoryEmpty,
    /// No set has finished, so there is no winner to record.
    NoSetWinner,
    /// Every set of the match has already been recorded.
    AllSetsPlayed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetConcluded => write!(f, "set concluded"),
            Self::HistoryEmpty => write!(f, "history empty"),
            Self::NoSetWinner => write!(f, "no set winner"),
            Self::AllSetsPlayed => write!(f, "all sets played"),
        }
    }
}

/// Result of [`MatchEngine::add_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// The point counted and play goes on.
    Scored,
    /// The point counted and the teams must change ends.
    ScoredSwitchSides,
    /// The point counted and closed the set.
    SetConcluded { winner: TeamId },
    /// Nothing changed.
    Rejected(Rejection),
}

impl PointOutcome {
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Whether the side-switch alert should be raised.
    #[must_use]
    pub fn switch_sides(self) -> bool {
        matches!(self, Self::ScoredSwitchSides)
    }
}

/// Result of every other mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Rejected(Rejection),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Single source of truth for match progress.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    state: MatchState,
}

impl MatchEngine {
    /// New match with the standard rules for `mode`.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::from_state(MatchState::new(mode))
    }

    /// New match with explicit rules.
    #[must_use]
    pub fn with_rules(mode: GameMode, rules: GameRules) -> Self {
        Self::from_state(MatchState::with_rules(mode, rules))
    }

    /// Resume from an existing record.
    #[must_use]
    pub fn from_state(state: MatchState) -> Self {
        tracing::debug!(
            match_id = %state.match_id,
            mode = %state.mode,
            points_to_win = state.rules.points_to_win,
            tiebreak_points = state.rules.tiebreak_points,
            switch_sides = state.rules.switch_sides,
            "Match engine ready"
        );
        Self { state }
    }

    /// Hand back the record.
    #[must_use]
    pub fn into_state(self) -> MatchState {
        self.state
    }

    // =================================================================
    // Scoring
    // =================================================================

    /// Award a rally to `team`.
    ///
    /// Snapshots the scores and server, increments the score, hands the
    /// serve to `team`, then checks for a set win. If the set did not end,
    /// checks whether the teams must change ends.
    pub fn add_point(&mut self, team: TeamId) -> PointOutcome {
        if self.state.phase.is_concluded() {
            return self.reject_point("add_point", Rejection::SetConcluded);
        }

        self.snapshot();
        self.state.team_mut(team).score += 1;
        self.state.serving_team = team;

        let (s1, s2) = self.state.scores();
        tracing::debug!(
            match_id = %self.state.match_id,
            team = %team,
            team1 = s1,
            team2 = s2,
            "Point scored"
        );

        if let Some(winner) = self.check_set_win(s1, s2) {
            self.state.phase = SetPhase::Concluded { winner };
            tracing::info!(
                match_id = %self.state.match_id,
                set = self.current_set_number(),
                winner = %winner,
                team1 = s1,
                team2 = s2,
                "Set concluded"
            );
            return PointOutcome::SetConcluded { winner };
        }

        if self.check_switch_sides(s1, s2) {
            tracing::debug!(
                match_id = %self.state.match_id,
                total = s1 + s2,
                "Switch sides"
            );
            return PointOutcome::ScoredSwitchSides;
        }

        PointOutcome::Scored
    }

    /// Manually take a point away from `team` (floored at zero).
    ///
    /// Still records a snapshot so the correction itself can be undone.
    /// Win and side-switch conditions are not re-evaluated.
    pub fn subtract_point(&mut self, team: TeamId) -> Transition {
        if self.state.phase.is_concluded() {
            return self.reject("subtract_point", Rejection::SetConcluded);
        }

        self.snapshot();
        let score = self.state.team(team).score.saturating_sub(1);
        self.state.team_mut(team).score = score;

        tracing::debug!(
            match_id = %self.state.match_id,
            team = %team,
            score,
            "Point subtracted"
        );
        Transition::Applied
    }

    /// Restore the scores and server from the latest snapshot.
    pub fn undo_last_point(&mut self) -> Transition {
        if self.state.phase.is_concluded() {
            return self.reject("undo_last_point", Rejection::SetConcluded);
        }
        let Some(entry) = self.state.history.pop() else {
            return self.reject("undo_last_point", Rejection::HistoryEmpty);
        };

        for team in TeamId::ALL {
            self.state.team_mut(team).score = entry.score(team);
        }
        self.state.serving_team = entry.serving_team;

        tracing::debug!(
            match_id = %self.state.match_id,
            team1 = entry.team1_score,
            team2 = entry.team2_score,
            serving = %entry.serving_team,
            "Point undone"
        );
        Transition::Applied
    }

    /// Manually move the serve (the serve badge on each panel).
    pub fn set_serving_team(&mut self, team: TeamId) -> Transition {
        if self.state.phase.is_concluded() {
            return self.reject("set_serving_team", Rejection::SetConcluded);
        }
        self.state.serving_team = team;
        Transition::Applied
    }

    // =================================================================
    // Set / match lifecycle
    // =================================================================

    /// Record the finished set's winner and open the next set.
    pub fn start_new_set(&mut self) -> Transition {
        let Some(winner) = self.state.phase.winner() else {
            return self.reject("start_new_set", Rejection::NoSetWinner);
        };
        if self.state.sets_won.len() >= self.max_sets() {
            return self.reject("start_new_set", Rejection::AllSetsPlayed);
        }

        self.state.sets_won.push(winner);
        self.state.clear_set();

        tracing::info!(
            match_id = %self.state.match_id,
            set = self.current_set_number(),
            team1_sets = self.sets_won_by(TeamId::Team1),
            team2_sets = self.sets_won_by(TeamId::Team2),
            tiebreak = self.is_tiebreak(),
            "New set started"
        );
        Transition::Applied
    }

    /// Start the match over: scores, serve, history and set results.
    /// Team names, colors and rules are kept.
    pub fn reset_game(&mut self) {
        self.state.clear_set();
        self.state.sets_won.clear();
        tracing::info!(match_id = %self.state.match_id, "Match reset");
    }

    /// Shallow-merge settings. Scores, serve, history and sets are untouched.
    pub fn update_settings(&mut self, team1: &TeamPatch, team2: &TeamPatch, rules: &RulesPatch) {
        self.state.team1.apply(team1);
        self.state.team2.apply(team2);
        self.state.rules.apply(rules);
        tracing::debug!(
            match_id = %self.state.match_id,
            team1 = %self.state.team1.name,
            team2 = %self.state.team2.name,
            points_to_win = self.state.rules.points_to_win,
            tiebreak_points = self.state.rules.tiebreak_points,
            switch_sides = self.state.rules.switch_sides,
            "Settings updated"
        );
    }

    // =================================================================
    // Rule predicates
    // =================================================================

    /// Whether the current set is the deciding set.
    #[must_use]
    pub fn is_tiebreak(&self) -> bool {
        rules::is_tiebreak(self.state.mode, &self.state.sets_won)
    }

    /// Points needed to close the current set.
    #[must_use]
    pub fn required_points(&self) -> u32 {
        rules::required_points(&self.state.rules, self.is_tiebreak())
    }

    /// The team that would win the current set at these scores, if any.
    #[must_use]
    pub fn check_set_win(&self, team1_score: u32, team2_score: u32) -> Option<TeamId> {
        rules::set_winner(team1_score, team2_score, self.required_points())
    }

    /// Whether the teams must change ends at these scores.
    #[must_use]
    pub fn check_switch_sides(&self, team1_score: u32, team2_score: u32) -> bool {
        rules::should_switch_sides(self.state.mode, &self.state.rules, team1_score, team2_score)
    }

    // =================================================================
    // Queries
    // =================================================================

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn match_id(&self) -> MatchId {
        self.state.match_id
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.state.rules
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        self.state.team(id)
    }

    #[must_use]
    pub fn score(&self, id: TeamId) -> u32 {
        self.state.team(id).score
    }

    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        self.state.scores()
    }

    #[must_use]
    pub fn serving_team(&self) -> TeamId {
        self.state.serving_team
    }

    #[must_use]
    pub fn phase(&self) -> SetPhase {
        self.state.phase
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.state.phase.is_concluded()
    }

    /// Winner of the current set, once it has concluded.
    #[must_use]
    pub fn set_winner(&self) -> Option<TeamId> {
        self.state.phase.winner()
    }

    /// Winners of completed sets, in order.
    #[must_use]
    pub fn sets_won(&self) -> &[TeamId] {
        &self.state.sets_won
    }

    #[must_use]
    pub fn sets_won_by(&self, team: TeamId) -> usize {
        rules::sets_won_by(&self.state.sets_won, team)
    }

    /// 1-based number of the set being played.
    #[must_use]
    pub fn current_set_number(&self) -> usize {
        self.state.sets_won.len() + 1
    }

    #[must_use]
    pub fn max_sets(&self) -> usize {
        self.state.mode.max_sets()
    }

    /// The team holding a majority of the match's sets, if any.
    #[must_use]
    pub fn match_winner(&self) -> Option<TeamId> {
        rules::match_winner(self.state.mode, &self.state.sets_won)
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.state.phase.is_concluded() && !self.state.history.is_empty()
    }

    // =================================================================
    // Internals
    // =================================================================

    fn snapshot(&mut self) {
        let (team1_score, team2_score) = self.state.scores();
        self.state.history.push(HistoryEntry {
            team1_score,
            team2_score,
            serving_team: self.state.serving_team,
        });
    }

    fn reject(&self, op: &'static str, reason: Rejection) -> Transition {
        self.log_rejection(op, reason);
        Transition::Rejected(reason)
    }

    fn reject_point(&self, op: &'static str, reason: Rejection) -> PointOutcome {
        self.log_rejection(op, reason);
        PointOutcome::Rejected(reason)
    }

    fn log_rejection(&self, op: &'static str, reason: Rejection) {
        tracing::debug!(
            match_id = %self.state.match_id,
            op,
            reason = %reason,
            phase = %self.state.phase,
            "Operation ignored"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TeamId::{Team1, Team2};

    fn engine_at(mode: GameMode, t1: u32, t2: u32) -> MatchEngine {
        let mut engine = MatchEngine::new(mode);
        engine.state.team1.score = t1;
        engine.state.team2.score = t2;
        engine
    }

    #[test]
    fn add_point_increments_and_takes_serve() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        assert_eq!(engine.add_point(Team2), PointOutcome::Scored);
        assert_eq!(engine.scores(), (0, 1));
        assert_eq!(engine.serving_team(), Team2);
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn add_point_concludes_set() {
        let mut engine = engine_at(GameMode::Volleyball, 24, 20);
        assert_eq!(
            engine.add_point(Team1),
            PointOutcome::SetConcluded { winner: Team1 }
        );
        assert!(engine.is_concluded());
        assert_eq!(engine.set_winner(), Some(Team1));
    }

    #[test]
    fn concluded_set_rejects_scoring() {
        let mut engine = engine_at(GameMode::Volleyball, 24, 20);
        engine.add_point(Team1);
        let before = engine.state().clone();

        assert_eq!(
            engine.add_point(Team2),
            PointOutcome::Rejected(Rejection::SetConcluded)
        );
        assert_eq!(
            engine.subtract_point(Team1),
            Transition::Rejected(Rejection::SetConcluded)
        );
        assert_eq!(
            engine.undo_last_point(),
            Transition::Rejected(Rejection::SetConcluded)
        );
        assert_eq!(
            engine.set_serving_team(Team2),
            Transition::Rejected(Rejection::SetConcluded)
        );
        assert_eq!(engine.state(), &before);
        assert!(!engine.can_undo());
    }

    #[test]
    fn subtract_floors_at_zero_but_records_history() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        assert!(engine.subtract_point(Team1).is_applied());
        assert_eq!(engine.scores(), (0, 0));
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn subtract_does_not_reevaluate_win() {
        // 26-25 is not a win; subtracting from team2 gives 26-24, which
        // would be, but only add_point evaluates the win condition.
        let mut engine = engine_at(GameMode::Volleyball, 26, 25);
        engine.subtract_point(Team2);
        assert_eq!(engine.scores(), (26, 24));
        assert!(!engine.is_concluded());
    }

    #[test]
    fn subtract_keeps_server() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        engine.add_point(Team2);
        engine.subtract_point(Team2);
        assert_eq!(engine.serving_team(), Team2);
    }

    #[test]
    fn undo_restores_scores_and_server() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        engine.add_point(Team1);
        engine.add_point(Team2);
        assert!(engine.undo_last_point().is_applied());
        assert_eq!(engine.scores(), (1, 0));
        assert_eq!(engine.serving_team(), Team1);
    }

    #[test]
    fn undo_with_empty_history_is_noop() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        assert_eq!(
            engine.undo_last_point(),
            Transition::Rejected(Rejection::HistoryEmpty)
        );
        assert_eq!(engine.scores(), (0, 0));
    }

    #[test]
    fn undo_reverts_subtraction() {
        let mut engine = engine_at(GameMode::Volleyball, 5, 3);
        engine.subtract_point(Team1);
        engine.undo_last_point();
        assert_eq!(engine.scores(), (5, 3));
    }

    #[test]
    fn server_override_does_not_touch_history() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        assert!(engine.set_serving_team(Team2).is_applied());
        assert_eq!(engine.serving_team(), Team2);
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn start_new_set_requires_winner() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        engine.add_point(Team1);
        assert_eq!(
            engine.start_new_set(),
            Transition::Rejected(Rejection::NoSetWinner)
        );
        assert_eq!(engine.scores(), (1, 0));
        assert!(engine.sets_won().is_empty());
    }

    #[test]
    fn start_new_set_records_winner_and_clears() {
        let mut engine = engine_at(GameMode::BeachVolleyball, 10, 20);
        engine.add_point(Team2);
        assert!(engine.start_new_set().is_applied());
        assert_eq!(engine.sets_won(), &[Team2]);
        assert_eq!(engine.scores(), (0, 0));
        assert_eq!(engine.serving_team(), Team1);
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.phase(), SetPhase::InProgress);
        assert_eq!(engine.current_set_number(), 2);
    }

    #[test]
    fn start_new_set_rejected_once_all_sets_recorded() {
        let mut state = MatchState::new(GameMode::BeachVolleyball);
        state.sets_won = vec![Team1, Team2, Team1];
        state.phase = SetPhase::Concluded { winner: Team2 };
        let mut engine = MatchEngine::from_state(state);
        assert_eq!(
            engine.start_new_set(),
            Transition::Rejected(Rejection::AllSetsPlayed)
        );
        assert_eq!(engine.sets_won().len(), 3);
    }

    #[test]
    fn reset_clears_everything_but_settings() {
        let mut engine = engine_at(GameMode::Volleyball, 24, 10);
        engine.update_settings(
            &TeamPatch::name("Leones"),
            &TeamPatch::default(),
            &RulesPatch::default(),
        );
        engine.add_point(Team1);
        engine.start_new_set();
        engine.add_point(Team2);

        engine.reset_game();
        assert_eq!(engine.scores(), (0, 0));
        assert_eq!(engine.serving_team(), Team1);
        assert!(engine.sets_won().is_empty());
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.phase(), SetPhase::InProgress);
        assert_eq!(engine.team(Team1).name, "Leones");
    }

    #[test]
    fn update_settings_leaves_progress_alone() {
        let mut engine = MatchEngine::new(GameMode::Volleyball);
        engine.add_point(Team2);
        engine.update_settings(
            &TeamPatch::default(),
            &TeamPatch::color(sideout_types::TeamColor::Purple),
            &RulesPatch {
                points_to_win: Some(15),
                ..RulesPatch::default()
            },
        );
        assert_eq!(engine.scores(), (0, 1));
        assert_eq!(engine.serving_team(), Team2);
        assert_eq!(engine.history_len(), 1);
        assert_eq!(engine.rules().points_to_win, 15);
        assert_eq!(engine.rules().tiebreak_points, 15);
        assert_eq!(engine.team(Team2).color, sideout_types::TeamColor::Purple);
    }

    #[test]
    fn update_settings_allowed_while_concluded() {
        let mut engine = engine_at(GameMode::Volleyball, 24, 0);
        engine.add_point(Team1);
        engine.update_settings(
            &TeamPatch::name("A"),
            &TeamPatch::name("B"),
            &RulesPatch::default(),
        );
        assert_eq!(engine.team(Team1).name, "A");
        assert!(engine.is_concluded());
    }

    #[test]
    fn tiebreak_uses_tiebreak_points() {
        let mut state = MatchState::new(GameMode::Volleyball);
        state.sets_won = vec![Team1, Team2, Team2, Team1];
        let engine = MatchEngine::from_state(state);
        assert!(engine.is_tiebreak());
        assert_eq!(engine.required_points(), 15);
        assert_eq!(engine.check_set_win(15, 13), Some(Team1));
        assert_eq!(engine.check_set_win(15, 14), None);
    }

    #[test]
    fn no_switch_on_set_point() {
        let mut state = MatchState::new(GameMode::BeachVolleyball);
        state.rules.switch_sides = 5;
        state.team1.score = 20;
        state.team2.score = 14;
        let mut engine = MatchEngine::from_state(state);
        // 21 + 14 = 35, a multiple of 5, but the set ends first.
        assert_eq!(
            engine.add_point(Team1),
            PointOutcome::SetConcluded { winner: Team1 }
        );
    }

    #[test]
    fn match_winner_after_three_sets() {
        let mut state = MatchState::new(GameMode::Volleyball);
        state.sets_won = vec![Team2, Team2, Team2];
        let engine = MatchEngine::from_state(state);
        assert_eq!(engine.match_winner(), Some(Team2));
        assert_eq!(engine.sets_won_by(Team2), 3);
    }

    #[test]
    fn into_state_round_trips() {
        let mut engine = MatchEngine::new(GameMode::BeachVolleyball);
        engine.add_point(Team2);
        let id = engine.match_id();
        let state = engine.into_state();
        assert_eq!(state.match_id, id);
        let engine = MatchEngine::from_state(state);
        assert_eq!(engine.scores(), (0, 1));
    }
}

//! Pure scoring rules.
//!
//! Free functions over plain values so the engine, the render model and the
//! tests all evaluate exactly the same predicates:
//!
//! - **Tie-break**: both teams hold `(max_sets - 1) / 2` sets
//! - **Set win**: score ≥ required points AND lead ≥ 2 (deuce, no ceiling)
//! - **Side switch**: beach only, every `switch_sides` combined points

use sideout_types::{GameMode, GameRules, TeamId, constants};

/// Count the sets a team has won.
#[must_use]
pub fn sets_won_by(sets_won: &[TeamId], team: TeamId) -> usize {
    sets_won.iter().filter(|&&w| w == team).count()
}

/// Whether the next set to be played is the deciding set (2-2 or 1-1).
#[must_use]
pub fn is_tiebreak(mode: GameMode, sets_won: &[TeamId]) -> bool {
    let each = mode.tiebreak_sets_each();
    sets_won_by(sets_won, TeamId::Team1) == each && sets_won_by(sets_won, TeamId::Team2) == each
}

/// Points needed to close the current set.
#[must_use]
pub fn required_points(rules: &GameRules, tiebreak: bool) -> u32 {
    if tiebreak {
        rules.tiebreak_points
    } else {
        rules.points_to_win
    }
}

/// The team that has won the set at these scores, if any.
///
/// Reaching `required` is not enough: the leader must be ahead by at least
/// [`constants::WINNING_MARGIN`]. There is no point cap.
#[must_use]
pub fn set_winner(team1_score: u32, team2_score: u32, required: u32) -> Option<TeamId> {
    let wins = |own: u32, other: u32| {
        own >= required && own.saturating_sub(other) >= constants::WINNING_MARGIN
    };
    if wins(team1_score, team2_score) {
        Some(TeamId::Team1)
    } else if wins(team2_score, team1_score) {
        Some(TeamId::Team2)
    } else {
        None
    }
}

/// Whether the teams must change ends at these scores.
///
/// Only beach volleyball switches. An interval of zero never fires.
#[must_use]
pub fn should_switch_sides(
    mode: GameMode,
    rules: &GameRules,
    team1_score: u32,
    team2_score: u32,
) -> bool {
    if !mode.switches_sides() || rules.switch_sides == 0 {
        return false;
    }
    let total = team1_score + team2_score;
    total > 0 && total % rules.switch_sides == 0
}

/// The team holding a majority of the match's sets, if any.
#[must_use]
pub fn match_winner(mode: GameMode, sets_won: &[TeamId]) -> Option<TeamId> {
    TeamId::ALL
        .into_iter()
        .find(|&team| sets_won_by(sets_won, team) >= mode.sets_to_win())
}

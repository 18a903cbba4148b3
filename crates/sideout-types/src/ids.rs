//! Identifiers used throughout SideOut.
//!
//! Teams are a closed pair, so [`TeamId`] is an enum rather than a UUID.
//! A running match session gets a UUIDv7 [`MatchId`] for log correlation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// TeamId
// ---------------------------------------------------------------------------

/// One of the two sides of the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamId {
    Team1,
    Team2,
}

impl TeamId {
    /// Both teams, in display order.
    pub const ALL: [TeamId; 2] = [TeamId::Team1, TeamId::Team2];

    /// The team on the other side of the net.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team1 => write!(f, "team1"),
            Self::Team2 => write!(f, "team2"),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl TeamId {
    /// Deterministic pseudo-random rally winners for property tests.
    pub fn random_rallies(len: usize, seed: u64) -> Vec<TeamId> {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(seed);
        (0..len)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    TeamId::Team1
                } else {
                    TeamId::Team2
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// MatchId
// ---------------------------------------------------------------------------

/// Identifier for one scoreboard session. Uses UUIDv7 for time-ordered sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for team in TeamId::ALL {
            assert_ne!(team.opponent(), team);
            assert_eq!(team.opponent().opponent(), team);
        }
    }

    #[test]
    fn team_id_display() {
        assert_eq!(format!("{}", TeamId::Team1), "team1");
        assert_eq!(format!("{}", TeamId::Team2), "team2");
    }

    #[test]
    fn team_id_serializes_lowercase() {
        let json = serde_json::to_string(&TeamId::Team2).unwrap();
        assert_eq!(json, "\"team2\"");
        let back: TeamId = serde_json::from_str("\"team1\"").unwrap();
        assert_eq!(back, TeamId::Team1);
    }

    #[test]
    fn match_ids_are_unique() {
        assert_ne!(MatchId::new(), MatchId::new());
    }

    #[test]
    fn random_rallies_are_seeded() {
        let a = TeamId::random_rallies(64, 7);
        let b = TeamId::random_rallies(64, 7);
        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
    }
}

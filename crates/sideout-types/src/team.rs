//! Team model: display name, palette color, and the running set score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{TeamId, constants};

/// Palette token offered by the team settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Pink,
    Yellow,
    Indigo,
}

impl TeamColor {
    /// Every selectable color, in picker order.
    pub const PALETTE: [TeamColor; 8] = [
        TeamColor::Blue,
        TeamColor::Red,
        TeamColor::Green,
        TeamColor::Orange,
        TeamColor::Purple,
        TeamColor::Pink,
        TeamColor::Yellow,
        TeamColor::Indigo,
    ];

    /// Human-readable label shown under the swatch.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Azul",
            Self::Red => "Rojo",
            Self::Green => "Verde",
            Self::Orange => "Naranja",
            Self::Purple => "Púrpura",
            Self::Pink => "Rosa",
            Self::Yellow => "Amarillo",
            Self::Indigo => "Índigo",
        }
    }

    /// Style token handed to the renderer as-is.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-600",
            Self::Red => "bg-red-600",
            Self::Green => "bg-green-600",
            Self::Orange => "bg-orange-600",
            Self::Purple => "bg-purple-600",
            Self::Pink => "bg-pink-600",
            Self::Yellow => "bg-yellow-600",
            Self::Indigo => "bg-indigo-600",
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One side of the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Display name.
    pub name: String,
    /// Panel color.
    pub color: TeamColor,
    /// Points in the current set.
    pub score: u32,
}

impl Team {
    #[must_use]
    pub fn new(name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            name: name.into(),
            color,
            score: 0,
        }
    }

    /// The default name and color for a side.
    #[must_use]
    pub fn default_for(id: TeamId) -> Self {
        match id {
            TeamId::Team1 => Self::new(constants::DEFAULT_TEAM1_NAME, TeamColor::Blue),
            TeamId::Team2 => Self::new(constants::DEFAULT_TEAM2_NAME, TeamColor::Red),
        }
    }

    /// Shallow-merge the fields present in `patch`. The score is never touched.
    pub fn apply(&mut self, patch: &TeamPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial team update coming out of the settings dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TeamColor>,
}

impl TeamPatch {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: None,
        }
    }

    #[must_use]
    pub fn color(color: TeamColor) -> Self {
        Self {
            name: None,
            color: Some(color),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_side() {
        let t1 = Team::default_for(TeamId::Team1);
        let t2 = Team::default_for(TeamId::Team2);
        assert_eq!(t1.name, "Equipo 1");
        assert_eq!(t1.color, TeamColor::Blue);
        assert_eq!(t2.name, "Equipo 2");
        assert_eq!(t2.color, TeamColor::Red);
        assert_eq!(t1.score, 0);
    }

    #[test]
    fn apply_patch_keeps_score() {
        let mut team = Team::default_for(TeamId::Team1);
        team.score = 12;
        team.apply(&TeamPatch {
            name: Some("Halcones".into()),
            color: Some(TeamColor::Green),
        });
        assert_eq!(team.name, "Halcones");
        assert_eq!(team.color, TeamColor::Green);
        assert_eq!(team.score, 12);
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut team = Team::default_for(TeamId::Team2);
        let before = team.clone();
        team.apply(&TeamPatch::default());
        assert_eq!(team, before);
        assert!(TeamPatch::default().is_empty());
    }

    #[test]
    fn palette_tokens_are_distinct() {
        let mut tokens: Vec<&str> = TeamColor::PALETTE.iter().map(|c| c.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), TeamColor::PALETTE.len());
        assert_eq!(format!("{}", TeamColor::Indigo), "bg-indigo-600");
    }

    #[test]
    fn patch_omits_missing_fields() {
        let json = serde_json::to_string(&TeamPatch::color(TeamColor::Pink)).unwrap();
        assert_eq!(json, r#"{"color":"pink"}"#);
    }
}

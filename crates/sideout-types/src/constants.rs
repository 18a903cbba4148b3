//! System-wide constants for the SideOut scoreboard engine.

/// Indoor volleyball: points needed to win a regular set.
pub const VOLLEYBALL_POINTS_TO_WIN: u32 = 25;

/// Indoor volleyball: points needed to win the tie-break set.
pub const VOLLEYBALL_TIEBREAK_POINTS: u32 = 15;

/// Indoor volleyball: side-switch interval (only meaningful in beach mode,
/// kept so both modes carry a full rule set).
pub const VOLLEYBALL_SWITCH_SIDES: u32 = 8;

/// Indoor volleyball: best-of-five.
pub const VOLLEYBALL_MAX_SETS: usize = 5;

/// Beach volleyball: points needed to win a regular set.
pub const BEACH_POINTS_TO_WIN: u32 = 21;

/// Beach volleyball: points needed to win the tie-break set.
pub const BEACH_TIEBREAK_POINTS: u32 = 15;

/// Beach volleyball: teams change ends every N combined points.
pub const BEACH_SWITCH_SIDES: u32 = 7;

/// Beach volleyball: best-of-three.
pub const BEACH_MAX_SETS: usize = 3;

/// Minimum lead required to close out a set.
pub const WINNING_MARGIN: u32 = 2;

/// Inclusive bounds accepted by the settings dialog for points to win.
pub const POINTS_TO_WIN_RANGE: (u32, u32) = (15, 50);

/// Inclusive bounds accepted by the settings dialog for tie-break points.
pub const TIEBREAK_POINTS_RANGE: (u32, u32) = (10, 25);

/// Inclusive bounds accepted by the settings dialog for the switch interval.
pub const SWITCH_SIDES_RANGE: (u32, u32) = (5, 15);

/// A downward drag must travel further than this (px) to count as a swipe.
pub const DEFAULT_SWIPE_DISTANCE_PX: f32 = 50.0;

/// A swipe must finish within this window (ms).
pub const DEFAULT_SWIPE_WINDOW_MS: u64 = 500;

/// A touch that moved less than this (px) is a tap.
pub const DEFAULT_TAP_SLOP_PX: f32 = 20.0;

/// Drag distance (px) after which the "-1" hint overlay is shown.
pub const DEFAULT_SUBTRACT_HINT_PX: f32 = 20.0;

/// How long the side-switch alert stays on screen (ms).
pub const DEFAULT_SWITCH_ALERT_MS: u64 = 3000;

/// Default team names.
pub const DEFAULT_TEAM1_NAME: &str = "Equipo 1";
pub const DEFAULT_TEAM2_NAME: &str = "Equipo 2";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SideOut";

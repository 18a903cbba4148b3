//! # sideout-touch
//!
//! **Touch presentation support for SideOut.**
//!
//! Sits between the pixels and MatchCore. The renderer forwards raw touch
//! and button events here and draws the [`ScoreboardView`] it gets back:
//!
//! 1. **GestureTracker**: classifies taps (add point) and downward swipes (remove point)
//! 2. **SwitchAlert**: self-clearing "change ends" notice for beach volleyball
//! 3. **SettingsDraft**: bounded team / rule editing before anything reaches the engine
//! 4. **ScoreboardView**: per-frame render model (panels, set strip, modals)
//! 5. **Scoreboard**: controller wiring all of the above to one `MatchEngine`
//!
//! ## Event Flow
//!
//! ```text
//! touch → Scoreboard.touch_end() → Gesture → MatchEngine.add_point()
//!       → PointOutcome → SwitchAlert.raise() → Scoreboard.view(now)
//! ```

pub mod alert;
pub mod gesture;
pub mod logging;
pub mod scoreboard;
pub mod settings;
pub mod view;

pub use alert::SwitchAlert;
pub use gesture::{Gesture, GestureTracker};
pub use logging::{LogFormat, init_logging};
pub use scoreboard::Scoreboard;
pub use settings::SettingsDraft;
pub use view::{ScoreboardView, SetEndSummary, SetIndicator, TeamPanel, TiebreakBanner};

//! Tap / swipe classification for the score panels.
//!
//! A touch that barely moves is a tap (add a point). A quick downward drag
//! is a swipe (take a point away). Anything in between is ignored.
//!
//! The tracker is ephemeral view state: it never touches the match engine,
//! it only reports a [`Gesture`] for the caller to dispatch.

use chrono::{DateTime, TimeDelta, Utc};
use sideout_types::{GestureConfig, TeamId};

/// A completed, recognised gesture on one team's panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Short touch with little movement: award a point.
    Tap(TeamId),
    /// Fast downward drag: remove a point.
    SwipeDown(TeamId),
}

impl Gesture {
    #[must_use]
    pub fn team(self) -> TeamId {
        match self {
            Self::Tap(team) | Self::SwipeDown(team) => team,
        }
    }
}

/// In-flight touch state.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    config: GestureConfig,
    start_y: f32,
    start_time: Option<DateTime<Utc>>,
    team: Option<TeamId>,
    distance: f32,
}

impl GestureTracker {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            start_y: 0.0,
            start_time: None,
            team: None,
            distance: 0.0,
        }
    }

    /// Finger down on `team`'s panel.
    pub fn touch_start(&mut self, team: TeamId, y: f32, at: DateTime<Utc>) {
        self.start_y = y;
        self.start_time = Some(at);
        self.team = Some(team);
        self.distance = 0.0;
    }

    /// Finger moved. Only downward travel is recorded.
    pub fn touch_move(&mut self, y: f32) {
        if !self.is_active() {
            return;
        }
        let distance = y - self.start_y;
        if distance > 0.0 {
            self.distance = distance;
        }
    }

    /// Finger up. Classifies the touch and resets the tracker.
    pub fn touch_end(&mut self, at: DateTime<Utc>) -> Option<Gesture> {
        let (Some(team), Some(started)) = (self.team, self.start_time) else {
            return None;
        };
        let distance = self.distance;
        self.cancel();

        let quick = at - started < millis(self.config.swipe_window_ms);
        if quick && distance > self.config.swipe_distance_px {
            Some(Gesture::SwipeDown(team))
        } else if distance < self.config.tap_slop_px {
            Some(Gesture::Tap(team))
        } else {
            tracing::trace!(team = %team, distance, "Touch discarded");
            None
        }
    }

    /// Drop the in-flight touch without classifying it.
    pub fn cancel(&mut self) {
        self.start_y = 0.0;
        self.start_time = None;
        self.team = None;
        self.distance = 0.0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.team.is_some()
    }

    /// Whether `team`'s panel should show the "-1" overlay.
    #[must_use]
    pub fn shows_subtract_hint(&self, team: TeamId) -> bool {
        self.team == Some(team) && self.distance > self.config.subtract_hint_px
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

pub(crate) fn millis(ms: u64) -> TimeDelta {
    i64::try_from(ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX)
}

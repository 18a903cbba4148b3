//! Self-clearing "change ends" alert.
//!
//! Raised when a beach-volleyball point lands on the switch interval and
//! hidden again after a fixed display time. The alert is a deadline checked
//! at render time, so there is no timer to cancel.

use chrono::{DateTime, TimeDelta, Utc};

use crate::gesture::millis;

/// Visibility window of the side-switch alert.
#[derive(Debug, Clone)]
pub struct SwitchAlert {
    display_for: TimeDelta,
    visible_until: Option<DateTime<Utc>>,
}

impl SwitchAlert {
    #[must_use]
    pub fn new(display_ms: u64) -> Self {
        Self {
            display_for: millis(display_ms),
            visible_until: None,
        }
    }

    /// Show the alert from `at`. Raising again restarts the window.
    pub fn raise(&mut self, at: DateTime<Utc>) {
        let until = at
            .checked_add_signed(self.display_for)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.visible_until = Some(until);
        tracing::debug!(until = ?self.visible_until, "Switch alert raised");
    }

    /// Whether the alert is on screen at `now`.
    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    /// Forget an alert whose window has passed. Returns whether it was cleared.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        if self.visible_until.is_some() && !self.is_visible(now) {
            self.visible_until = None;
            return true;
        }
        false
    }

    /// Hide immediately.
    pub fn clear(&mut self) {
        self.visible_until = None;
    }
}

impl Default for SwitchAlert {
    fn default() -> Self {
        Self::new(sideout_types::constants::DEFAULT_SWITCH_ALERT_MS)
    }
}

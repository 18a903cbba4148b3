//! Undo stack for the current set.
//!
//! Every scoring mutation pushes a [`HistoryEntry`] first; undo pops the
//! most recent one. The stack only lives for one set: it is cleared when a
//! new set starts and on a full match reset.

use serde::{Deserialize, Serialize};
use sideout_types::HistoryEntry;

/// Snapshots taken before each scoring mutation, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every snapshot (new set or match reset).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use sideout_types::TeamId;

    use super::*;

    fn entry(t1: u32, t2: u32, serving: TeamId) -> HistoryEntry {
        HistoryEntry {
            team1_score: t1,
            team2_score: t2,
            serving_team: serving,
        }
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = HistoryStack::new();
        stack.push(entry(0, 0, TeamId::Team1));
        stack.push(entry(1, 0, TeamId::Team1));
        stack.push(entry(1, 1, TeamId::Team2));

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(entry(1, 1, TeamId::Team2)));
        assert_eq!(stack.pop(), Some(entry(1, 0, TeamId::Team1)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn empty_stack_pops_none() {
        let mut stack = HistoryStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn clear_empties() {
        let mut stack = HistoryStack::new();
        stack.push(entry(3, 2, TeamId::Team2));
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn entry_score_lookup() {
        let e = entry(7, 4, TeamId::Team1);
        assert_eq!(e.score(TeamId::Team1), 7);
        assert_eq!(e.score(TeamId::Team2), 4);
    }
}

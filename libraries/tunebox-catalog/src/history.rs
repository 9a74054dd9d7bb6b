//! Playback history tracking
//!
//! Maintains a bounded, most-recent-first log of played tracks

use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use tunebox_core::{Track, TrackRef};

use crate::types::DEFAULT_HISTORY_SIZE;

/// Playback history with bounded size
///
/// Entries are non-owning handles: the log never keeps a track alive on its
/// own. Recording past capacity discards the oldest entries.
#[derive(Debug, Clone)]
pub struct PlaybackLog {
    /// History buffer (most recent = front)
    entries: VecDeque<Weak<Track>>,

    /// Maximum history size
    capacity: usize,
}

impl PlaybackLog {
    /// Create new history with specified maximum size
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a play
    ///
    /// If history is full, oldest entries are discarded. Entries whose track
    /// has been dropped do not count toward capacity.
    pub fn record(&mut self, track: &TrackRef) {
        self.entries.retain(|e| e.strong_count() > 0);
        self.entries.push_front(Arc::downgrade(track));
        self.entries.truncate(self.capacity);
    }

    /// Remove every entry with the same identity as `track`
    ///
    /// Returns the number of entries removed.
    pub fn purge(&mut self, track: &Track) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.upgrade().is_some_and(|t| !t.same_identity(track)));
        before - self.entries.len()
    }

    /// Copy of the history, most recent first
    pub fn snapshot(&self) -> Vec<TrackRef> {
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    /// Most recently played track
    pub fn most_recent(&self) -> Option<TrackRef> {
        self.entries.iter().find_map(Weak::upgrade)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.strong_count() > 0).count()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum history size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PlaybackLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

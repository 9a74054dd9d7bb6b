//! Ordered track collection with shuffle
//!
//! Keeps the canonical insertion order untouched and derives the
//! presentation order from it:
//!
//! ```text
//! canonical:     [A, B, C, D]
//! order:         [2, 0, 3, 1]   (shuffle on)
//! presentation:  [C, A, D, B]
//! ```
//!
//! Turning shuffle off resets `order` to the identity, so the original
//! sequence always comes back exactly.

use crate::shuffle::{is_permutation, RandomShuffler, Shuffler};
use std::fmt;
use tracing::warn;
use tunebox_core::{Result, Track, TrackRef, ValidationError};

/// Named, deduplicated list of tracks
#[derive(Debug)]
pub struct Collection {
    /// Collection name
    name: String,

    /// Canonical order (insertion order, never shuffled)
    tracks: Vec<TrackRef>,

    /// Presentation order as indices into `tracks`
    order: Vec<usize>,

    /// Whether shuffle is on
    shuffled: bool,

    /// Permutation source used while shuffled
    shuffler: Box<dyn Shuffler>,
}

impl Collection {
    /// Create an empty collection with a random shuffler
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_shuffler(name, Box::new(RandomShuffler::new()))
    }

    /// Create an empty collection with a custom shuffler
    pub fn with_shuffler(name: impl Into<String>, shuffler: Box<dyn Shuffler>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(Self {
            name,
            tracks: Vec::new(),
            order: Vec::new(),
            shuffled: false,
            shuffler,
        })
    }

    /// Add a track
    ///
    /// Returns `false` without changing anything if a track with the same
    /// identity is already present.
    pub fn add(&mut self, track: TrackRef) -> bool {
        if self.contains(&track) {
            return false;
        }
        self.tracks.push(track);
        self.refresh_order();
        true
    }

    /// Remove the track with the same identity as `track`
    ///
    /// Returns the removed handle, or `None` if no such track is present.
    pub fn remove(&mut self, track: &Track) -> Option<TrackRef> {
        let pos = self.position(track)?;
        let removed = self.tracks.remove(pos);
        self.refresh_order();
        Some(removed)
    }

    /// Turn shuffle on or off
    ///
    /// Turning it on draws a fresh permutation; turning it off restores the
    /// canonical order. Requesting the current state does nothing.
    pub fn set_shuffle(&mut self, on: bool) {
        if self.shuffled == on {
            return;
        }
        self.shuffled = on;
        self.refresh_order();
    }

    /// Whether shuffle is on
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Tracks in presentation order
    pub fn presentation_order(&self) -> Vec<TrackRef> {
        self.order.iter().map(|&i| TrackRef::clone(&self.tracks[i])).collect()
    }

    /// Tracks in canonical (insertion) order
    pub fn tracks(&self) -> Vec<TrackRef> {
        self.tracks.clone()
    }

    /// Iterate over tracks in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &TrackRef> {
        self.tracks.iter()
    }

    /// Track at `index` in presentation order
    pub fn get(&self, index: usize) -> Option<TrackRef> {
        self.order
            .get(index)
            .map(|&i| TrackRef::clone(&self.tracks[i]))
    }

    /// Stored handle for the track with the same identity
    pub fn find(&self, track: &Track) -> Option<TrackRef> {
        self.position(track).map(|pos| TrackRef::clone(&self.tracks[pos]))
    }

    /// Whether a track with the same identity is present
    pub fn contains(&self, track: &Track) -> bool {
        self.position(track).is_some()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the collection has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn position(&self, track: &Track) -> Option<usize> {
        self.tracks.iter().position(|t| t.same_identity(track))
    }

    /// Rebuild presentation order after a shuffle toggle or structural change
    fn refresh_order(&mut self) {
        let len = self.tracks.len();
        if !self.shuffled {
            self.order = (0..len).collect();
            return;
        }

        let order = self.shuffler.permutation(&self.tracks);
        if is_permutation(&order, len) {
            self.order = order;
        } else {
            warn!(
                collection = %self.name,
                len,
                "Shuffler returned an invalid permutation, keeping canonical order"
            );
            self.order = (0..len).collect();
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} songs)", self.name, self.tracks.len())?;
        if self.shuffled {
            write!(f, ", shuffled")?;
        }
        Ok(())
    }
}

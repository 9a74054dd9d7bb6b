/// Track domain type
use crate::error::{Result, ValidationError};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to a track
///
/// Collections and the playback log all point at the same instance, so a play
/// count increment is visible through every handle.
pub type TrackRef = Arc<Track>;

/// Current calendar year on the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Identity of a track: title, artist and release year
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackKey {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Release year
    pub year: i32,
}

/// Song in the catalog
///
/// Everything except the play count is fixed at construction. Equality and
/// hashing only look at [`TrackKey`], so bumping the play count never breaks
/// a lookup.
#[derive(Debug)]
pub struct Track {
    title: String,
    artist: String,
    year: i32,
    genre: String,
    play_count: AtomicU64,
}

impl Track {
    /// Create a new track, validating against the current calendar year
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        play_count: u64,
        year: i32,
        genre: impl Into<String>,
    ) -> Result<Self> {
        Self::with_reference_year(title, artist, play_count, year, genre, current_year())
    }

    /// Create a new track, validating the year against `current_year`
    pub fn with_reference_year(
        title: impl Into<String>,
        artist: impl Into<String>,
        play_count: u64,
        year: i32,
        genre: impl Into<String>,
        current_year: i32,
    ) -> Result<Self> {
        let title = title.into();
        let artist = artist.into();

        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if artist.trim().is_empty() {
            return Err(ValidationError::EmptyArtist.into());
        }
        if year > current_year {
            return Err(ValidationError::FutureYear {
                year,
                current: current_year,
            }
            .into());
        }

        Ok(Self {
            title,
            artist,
            year,
            genre: genre.into(),
            play_count: AtomicU64::new(play_count),
        })
    }

    /// Track title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist name
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Release year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Genre, possibly empty
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Number of recorded plays
    pub fn play_count(&self) -> u64 {
        self.play_count.load(Ordering::Relaxed)
    }

    /// Record one more play
    pub fn increment_play_count(&self) {
        // Saturates at u64::MAX; the closure never returns None.
        let _ = self
            .play_count
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                Some(count.saturating_add(1))
            });
    }

    /// Identity triple used for dedup and removal
    pub fn key(&self) -> TrackKey {
        TrackKey {
            title: self.title.clone(),
            artist: self.artist.clone(),
            year: self.year,
        }
    }

    /// Whether `other` names the same song
    pub fn same_identity(&self, other: &Track) -> bool {
        self.year == other.year && self.title == other.title && self.artist == other.artist
    }

    /// Plain copy of all fields for structured output
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot {
            title: self.title.clone(),
            artist: self.artist.clone(),
            play_count: self.play_count(),
            year: self.year,
            genre: self.genre.clone(),
        }
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.artist.hash(state);
        self.year.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<28} {:<14} {} ({})    {}",
            self.title,
            format!("by {}", self.artist),
            self.play_count(),
            self.year,
            self.genre
        )
    }
}

/// Serializable point-in-time view of a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Play count at the time of the snapshot
    pub play_count: u64,

    /// Release year
    pub year: i32,

    /// Genre
    pub genre: String,
}

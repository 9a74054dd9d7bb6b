//! Catalog service - core orchestration
//!
//! Owns the library collection, the named playlists and the playback log,
//! and keeps them consistent with each other.

use crate::{
    collection::Collection,
    history::PlaybackLog,
    shuffle::{shuffler_for, Shuffler},
    types::CatalogConfig,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tunebox_core::{CatalogError, Result, Track, TrackRef};

/// Name of the playlist created by [`CatalogService::seed_defaults`]
pub const FAVORITES_PLAYLIST: &str = "Favorites";

/// Built-in songs: title, artist, plays, year, genre
const DEFAULT_SONGS: [(&str, &str, u64, i32, &str); 10] = [
    ("Midnight Rain", "Taylor Swift", 12_564_321, 2022, "Pop"),
    ("Viva La Vida", "Coldplay", 892_345_678, 2008, "Rock"),
    ("Blinding Lights", "The Weeknd", 1_567_890_123, 2019, "Synth-Pop"),
    ("Levitating", "Dua Lipa", 98_765_432, 2020, "Pop"),
    ("Golden Hour", "JVKE", 45_678_912, 2022, "Pop"),
    ("Unholy", "Sam Smith", 78_912_345, 2022, "Pop"),
    ("Flowers", "Miley Cyrus", 234_567_890, 2023, "Pop"),
    ("As It Was", "Harry Styles", 567_890_123, 2022, "Pop-Rock"),
    ("Anti-Hero", "Taylor Swift", 89_123_456, 2022, "Pop"),
    ("Heat Waves", "Glass Animals", 345_678_901, 2020, "Indie"),
];

/// Song catalog
///
/// Every operation is a synchronous in-memory update. The service is `Send`;
/// a concurrent host should put the whole instance behind one lock.
#[derive(Debug)]
pub struct CatalogService {
    library: Collection,
    playlists: BTreeMap<String, Collection>,
    history: PlaybackLog,
    config: CatalogConfig,
}

impl CatalogService {
    /// Create an empty catalog from configuration
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let shuffler = shuffler_for(config.shuffle_mode, config.shuffle_seed);
        Self::with_shuffler(config, shuffler)
    }

    /// Create an empty catalog whose library uses a custom shuffler
    pub fn with_shuffler(config: CatalogConfig, shuffler: Box<dyn Shuffler>) -> Result<Self> {
        config.validate()?;

        let mut library = Collection::with_shuffler(config.library_name.clone(), shuffler)?;
        library.set_shuffle(config.shuffle);

        Ok(Self {
            library,
            playlists: BTreeMap::new(),
            history: PlaybackLog::new(config.history_size),
            config,
        })
    }

    /// Load the built-in songs and the Favorites playlist
    ///
    /// Only runs on an empty library; returns the number of songs added.
    pub fn seed_defaults(&mut self) -> Result<usize> {
        if !self.library.is_empty() {
            debug!("Library already populated, skipping default songs");
            return Ok(0);
        }

        let mut added = 0;
        for (title, artist, plays, year, genre) in DEFAULT_SONGS {
            let track = Track::new(title, artist, plays, year, genre)?;
            if self.library.add(Arc::new(track)) {
                added += 1;
            }
        }
        self.create_playlist(FAVORITES_PLAYLIST)?;

        info!("Seeded {} default songs", added);
        Ok(added)
    }

    /// Add a track to the library
    ///
    /// Returns the library's handle for the track. On a duplicate this is
    /// the handle already stored, and `track` is dropped.
    pub fn add_track(&mut self, track: Track) -> TrackRef {
        if let Some(existing) = self.library.find(&track) {
            debug!(title = existing.title(), "Track already in library");
            return existing;
        }

        let track = Arc::new(track);
        self.library.add(Arc::clone(&track));
        debug!(title = track.title(), len = self.library.len(), "Added track");
        track
    }

    /// Remove a track from the library, every playlist and the history
    pub fn remove_track(&mut self, track: &Track) -> Option<TrackRef> {
        let removed = self.library.remove(track)?;

        for playlist in self.playlists.values_mut() {
            playlist.remove(track);
        }
        let purged = self.history.purge(track);

        debug!(
            title = removed.title(),
            purged,
            len = self.library.len(),
            "Removed track"
        );
        Some(removed)
    }

    /// Play the track at `index` in the library's current presentation order
    ///
    /// Nothing changes when the index is out of range.
    pub fn play_by_index(&mut self, index: usize) -> Result<TrackRef> {
        let Some(track) = self.library.get(index) else {
            let len = self.library.len();
            warn!(index, len, "Play index out of range");
            return Err(CatalogError::IndexOutOfBounds { index, len });
        };

        self.play(&track);
        Ok(track)
    }

    /// Play a library track by identity
    ///
    /// Returns `None` and changes nothing if the track is not in the library.
    pub fn play_track(&mut self, track: &Track) -> Option<TrackRef> {
        let track = self.library.find(track)?;
        self.play(&track);
        Some(track)
    }

    fn play(&mut self, track: &TrackRef) {
        track.increment_play_count();
        self.history.record(track);
        info!(
            title = track.title(),
            artist = track.artist(),
            plays = track.play_count(),
            "Playing"
        );
    }

    /// Library tracks with at least `threshold` plays, in canonical order
    pub fn filter_by_min_plays(&self, threshold: u64) -> Vec<TrackRef> {
        self.library
            .iter()
            .filter(|t| t.play_count() >= threshold)
            .cloned()
            .collect()
    }

    /// Flip library shuffle; returns the new state
    pub fn toggle_shuffle(&mut self) -> bool {
        let on = !self.library.is_shuffled();
        self.set_shuffle(on);
        on
    }

    /// Set library shuffle
    pub fn set_shuffle(&mut self, on: bool) {
        if self.library.is_shuffled() != on {
            info!(shuffle = on, "Library shuffle changed");
        }
        self.library.set_shuffle(on);
    }

    /// Recently played tracks, most recent first
    pub fn history(&self) -> Vec<TrackRef> {
        self.history.snapshot()
    }

    /// The library collection
    pub fn library(&self) -> &Collection {
        &self.library
    }

    /// Configuration this catalog was built from
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ===== Named playlists =====

    /// Create an empty playlist; existing names are left alone
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        if self.playlists.contains_key(name) {
            return Ok(());
        }

        // Offset the seed per playlist so seeded playlists don't all shuffle alike
        let seed = self
            .config
            .shuffle_seed
            .map(|s| s.wrapping_add(self.playlists.len() as u64 + 1));
        let playlist =
            Collection::with_shuffler(name, shuffler_for(self.config.shuffle_mode, seed))?;

        self.playlists.insert(name.to_string(), playlist);
        debug!(playlist = name, "Created playlist");
        Ok(())
    }

    /// Add a library track to a playlist
    ///
    /// Tracks not in the library are skipped. Returns whether it was inserted.
    pub fn add_to_playlist(&mut self, name: &str, track: &Track) -> Result<bool> {
        let shared = self.library.find(track);
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CatalogError::playlist_not_found(name))?;

        let Some(shared) = shared else {
            debug!(playlist = name, title = track.title(), "Track not in library");
            return Ok(false);
        };
        Ok(playlist.add(shared))
    }

    /// Remove a track from a playlist, leaving the library untouched
    pub fn remove_from_playlist(&mut self, name: &str, track: &Track) -> Result<Option<TrackRef>> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CatalogError::playlist_not_found(name))?;
        Ok(playlist.remove(track))
    }

    /// Set shuffle on a playlist
    pub fn set_playlist_shuffle(&mut self, name: &str, on: bool) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CatalogError::playlist_not_found(name))?;
        playlist.set_shuffle(on);
        Ok(())
    }

    /// Look up a playlist
    pub fn playlist(&self, name: &str) -> Option<&Collection> {
        self.playlists.get(name)
    }

    /// Playlist names, sorted
    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists.keys().cloned().collect()
    }
}

//! Tunebox - Catalog Management
//!
//! In-memory song catalog for Tunebox.
//!
//! This crate provides:
//! - Deduplicated, insertion-ordered collections
//! - Shuffle as a presentation layer (Random + Smart), never touching canonical order
//! - Bounded, most-recent-first playback history
//! - Named playlists sharing the library's tracks
//! - Play counting and play-count filtering
//!
//! # Architecture
//!
//! `tunebox-catalog` does no I/O: no files, no environment, no network.
//! Tracks are shared as `Arc<Track>`, so every collection and the history
//! observe the same play counter. Shuffling is pluggable through the
//! [`Shuffler`] trait.
//!
//! # Example: Basic Catalog
//!
//! ```rust
//! use tunebox_catalog::{CatalogConfig, CatalogService};
//! use tunebox_core::Track;
//!
//! let mut catalog = CatalogService::new(CatalogConfig::default()).unwrap();
//!
//! catalog.add_track(Track::new("Flowers", "Miley Cyrus", 10, 2023, "Pop").unwrap());
//! catalog.add_track(Track::new("Unholy", "Sam Smith", 5, 2022, "Pop").unwrap());
//!
//! let played = catalog.play_by_index(1).unwrap();
//! assert_eq!(played.play_count(), 6);
//! assert_eq!(catalog.history()[0].title(), "Unholy");
//!
//! let popular = catalog.filter_by_min_plays(10);
//! assert_eq!(popular.len(), 1);
//! ```
//!
//! # Example: Deterministic Shuffle
//!
//! ```rust
//! use tunebox_catalog::{CatalogConfig, CatalogService, Shuffler};
//! use tunebox_core::{Track, TrackRef};
//!
//! #[derive(Debug)]
//! struct Reverse;
//!
//! impl Shuffler for Reverse {
//!     fn permutation(&mut self, tracks: &[TrackRef]) -> Vec<usize> {
//!         (0..tracks.len()).rev().collect()
//!     }
//! }
//!
//! let mut catalog = CatalogService::with_shuffler(CatalogConfig::default(), Box::new(Reverse)).unwrap();
//! catalog.add_track(Track::new("A", "Artist", 0, 2020, "").unwrap());
//! catalog.add_track(Track::new("B", "Artist", 0, 2020, "").unwrap());
//!
//! catalog.toggle_shuffle();
//! assert_eq!(catalog.library().get(0).unwrap().title(), "B");
//! ```

mod collection;
mod history;
mod service;
mod shuffle;
pub mod types;

// Public exports
pub use collection::Collection;
pub use history::PlaybackLog;
pub use service::{CatalogService, FAVORITES_PLAYLIST};
pub use shuffle::{shuffler_for, RandomShuffler, Shuffler, SmartShuffler};
pub use types::{CatalogConfig, ShuffleMode};
pub use tunebox_core::{CatalogError, Result, Track, TrackRef};

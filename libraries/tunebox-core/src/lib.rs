//! Tunebox Core
//!
//! Core track type and error handling shared by every Tunebox crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackKey`, `TrackSnapshot`
//! - **Error Handling**: unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tunebox_core::{Track, TrackRef};
//!
//! let track: TrackRef = Arc::new(Track::new("Viva La Vida", "Coldplay", 0, 2008, "Rock").unwrap());
//! track.increment_play_count();
//! assert_eq!(track.play_count(), 1);
//!
//! // Future years are rejected
//! assert!(Track::new("Song", "Artist", 0, tunebox_core::current_year() + 1, "").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod track;

pub use error::{CatalogError, Result, ValidationError};
pub use track::{current_year, Track, TrackKey, TrackRef, TrackSnapshot};

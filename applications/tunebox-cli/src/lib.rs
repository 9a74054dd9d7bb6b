//! Tunebox command-line front end
//!
//! One-shot commands against a freshly seeded catalog.

pub mod config;
pub mod error;

use clap::Subcommand;
use serde::Serialize;
use std::fmt::Write;
use tunebox_catalog::CatalogService;
use tunebox_core::{Track, TrackRef, TrackSnapshot};

pub use error::{CliError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all songs in presentation order
    List,
    /// List songs with at least this many plays
    Filter {
        /// Minimum play count
        min_plays: u64,
    },
    /// Play songs by their listed number, then show the history
    Play {
        /// Song numbers as shown by `list` (1-based)
        #[arg(required = true)]
        numbers: Vec<usize>,
    },
    /// Show playback history
    History,
    /// Add a song, then list the library
    Add {
        title: String,
        artist: String,
        /// Release year
        year: i32,
        /// Starting play count
        #[arg(long, default_value_t = 0)]
        plays: u64,
        /// Genre
        #[arg(long, default_value = "")]
        genre: String,
    },
    /// Remove a song by its listed number, then list the library
    Remove {
        /// Song number as shown by `list` (1-based)
        number: usize,
    },
    /// Toggle shuffle, then list the library
    Shuffle,
}

#[derive(Debug, Serialize)]
struct Listing {
    heading: String,
    tracks: Vec<TrackSnapshot>,
}

#[derive(Debug, Serialize)]
struct ChangeReport {
    message: String,
    listing: Listing,
}

#[derive(Debug, Serialize)]
struct PlayReport {
    played: Vec<TrackSnapshot>,
    history: Vec<TrackSnapshot>,
}

fn snapshots(tracks: &[TrackRef]) -> Vec<TrackSnapshot> {
    tracks.iter().map(|t| t.snapshot()).collect()
}

fn numbered(out: &mut String, tracks: &[TrackRef]) {
    for (i, track) in tracks.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, track);
    }
}

/// Run one command and return what should be printed
pub fn execute(catalog: &mut CatalogService, command: &Command, json: bool) -> Result<String> {
    match command {
        Command::List => render_library(catalog, None, json),
        Command::Filter { min_plays } => {
            let tracks = catalog.filter_by_min_plays(*min_plays);
            let heading = format!("Songs with {} or more plays:", min_plays);
            if json {
                return render_json(&Listing {
                    heading,
                    tracks: snapshots(&tracks),
                });
            }

            let mut out = format!("{}\n", heading);
            if tracks.is_empty() {
                let _ = writeln!(out, "No songs found with {} or more plays.", min_plays);
            }
            numbered(&mut out, &tracks);
            Ok(out)
        }
        Command::Play { numbers } => {
            // Nothing plays unless every number is valid
            let len = catalog.library().len();
            if let Some(&number) = numbers.iter().find(|&&n| n == 0 || n > len) {
                return Err(CliError::InvalidSongNumber(number));
            }

            let mut played = Vec::with_capacity(numbers.len());
            for &number in numbers {
                played.push(catalog.play_by_index(number - 1)?);
            }

            let history = catalog.history();
            if json {
                return render_json(&PlayReport {
                    played: snapshots(&played),
                    history: snapshots(&history),
                });
            }

            let mut out = String::new();
            for track in &played {
                let _ = writeln!(out, "Playing: {}", track);
            }
            out.push('\n');
            out.push_str(&render_history(&history));
            Ok(out)
        }
        Command::History => {
            let history = catalog.history();
            if json {
                return render_json(&snapshots(&history));
            }
            Ok(render_history(&history))
        }
        Command::Add {
            title,
            artist,
            year,
            plays,
            genre,
        } => {
            let track = Track::new(title.as_str(), artist.as_str(), *plays, *year, genre.as_str())?;
            let message = if catalog.library().contains(&track) {
                format!("Already in library: {}", track.title())
            } else {
                format!("Added: {}", catalog.add_track(track).title())
            };
            render_library(catalog, Some(message), json)
        }
        Command::Remove { number } => {
            let track = number
                .checked_sub(1)
                .and_then(|index| catalog.library().get(index))
                .ok_or(CliError::InvalidSongNumber(*number))?;
            catalog.remove_track(&track);
            let message = format!("Removed: {}", track.title());
            render_library(catalog, Some(message), json)
        }
        Command::Shuffle => {
            let on = catalog.toggle_shuffle();
            let message = format!("Shuffle is now {}", if on { "on" } else { "off" });
            render_library(catalog, Some(message), json)
        }
    }
}

fn render_library(catalog: &CatalogService, message: Option<String>, json: bool) -> Result<String> {
    let library = catalog.library();
    let heading = library.to_string();
    let tracks = library.presentation_order();
    if json {
        let listing = Listing {
            heading,
            tracks: snapshots(&tracks),
        };
        return match message {
            Some(message) => render_json(&ChangeReport { message, listing }),
            None => render_json(&listing),
        };
    }

    let mut out = String::new();
    if let Some(message) = message {
        let _ = writeln!(out, "{}\n", message);
    }
    let _ = writeln!(out, "{}", heading);
    numbered(&mut out, &tracks);
    Ok(out)
}

fn render_history(history: &[TrackRef]) -> String {
    let mut out = String::from("Playback History:\n");
    if history.is_empty() {
        out.push_str("No songs played yet.\n");
    }
    numbered(&mut out, history);
    out
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

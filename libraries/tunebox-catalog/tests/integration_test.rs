//! Integration tests for the catalog service
//!
//! These tests walk through real catalog workflows end to end.

use std::sync::Arc;
use tunebox_catalog::{
    CatalogConfig, CatalogError, CatalogService, Shuffler, FAVORITES_PLAYLIST,
};
use tunebox_core::{Track, TrackRef};

// ===== Test Helpers =====

/// Shuffler that rotates the canonical order left by one
#[derive(Debug)]
struct RotateShuffler;

impl Shuffler for RotateShuffler {
    fn permutation(&mut self, tracks: &[TrackRef]) -> Vec<usize> {
        let len = tracks.len();
        (0..len).map(|i| (i + 1) % len).collect()
    }
}

fn song(title: &str, artist: &str, plays: u64) -> Track {
    Track::new(title, artist, plays, 2020, "Pop").unwrap()
}

fn titles(tracks: &[TrackRef]) -> Vec<String> {
    tracks.iter().map(|t| t.title().to_string()).collect()
}

fn catalog() -> CatalogService {
    CatalogService::new(CatalogConfig::default()).unwrap()
}

fn rotating_catalog() -> CatalogService {
    CatalogService::with_shuffler(CatalogConfig::default(), Box::new(RotateShuffler)).unwrap()
}

// ===== Scenarios =====

#[test]
fn play_filter_and_remove_workflow() {
    let mut catalog = catalog();
    let a = catalog.add_track(song("A", "Artist A", 10));
    let b = catalog.add_track(song("B", "Artist B", 5));

    catalog.play_by_index(0).unwrap();
    assert_eq!(a.play_count(), 11);
    assert_eq!(titles(&catalog.history()), vec!["A"]);

    catalog.play_by_index(1).unwrap();
    assert_eq!(b.play_count(), 6);
    assert_eq!(titles(&catalog.history()), vec!["B", "A"]);

    assert_eq!(titles(&catalog.filter_by_min_plays(6)), vec!["A", "B"]);
    assert_eq!(titles(&catalog.filter_by_min_plays(7)), vec!["A"]);

    let removed = catalog.remove_track(&b).unwrap();
    assert!(Arc::ptr_eq(&removed, &b));
    assert_eq!(catalog.library().len(), 1);
    assert_eq!(titles(&catalog.history()), vec!["A"]);
    assert_eq!(titles(&catalog.filter_by_min_plays(0)), vec!["A"]);
}

#[test]
fn double_toggle_restores_insertion_order() {
    let mut catalog = catalog();
    for i in 1..=5 {
        catalog.add_track(song(&format!("Track {}", i), "Artist", 0));
    }
    let original = titles(&catalog.library().presentation_order());

    catalog.toggle_shuffle();
    catalog.toggle_shuffle();

    assert!(!catalog.library().is_shuffled());
    assert_eq!(titles(&catalog.library().presentation_order()), original);
}

#[test]
fn play_by_index_follows_shuffled_order() {
    let mut catalog = rotating_catalog();
    let a = catalog.add_track(song("A", "Artist", 0));
    let b = catalog.add_track(song("B", "Artist", 0));
    let c = catalog.add_track(song("C", "Artist", 0));

    catalog.toggle_shuffle();
    assert_eq!(titles(&catalog.library().presentation_order()), vec!["B", "C", "A"]);

    let played = catalog.play_by_index(0).unwrap();
    assert!(Arc::ptr_eq(&played, &b));
    assert_eq!(a.play_count(), 0);
    assert_eq!(b.play_count(), 1);
    assert_eq!(c.play_count(), 0);

    // Canonical order is what filtering reports
    assert_eq!(titles(&catalog.filter_by_min_plays(0)), vec!["A", "B", "C"]);
}

#[test]
fn add_while_shuffled_reshuffles_including_new_track() {
    let mut catalog = rotating_catalog();
    catalog.add_track(song("A", "Artist", 0));
    catalog.add_track(song("B", "Artist", 0));
    catalog.set_shuffle(true);

    catalog.add_track(song("C", "Artist", 0));
    assert_eq!(titles(&catalog.library().presentation_order()), vec!["B", "C", "A"]);

    catalog.set_shuffle(false);
    assert_eq!(titles(&catalog.library().presentation_order()), vec!["A", "B", "C"]);
}

#[test]
fn history_keeps_last_five_plays() {
    let mut catalog = catalog();
    for i in 0..7 {
        catalog.add_track(song(&format!("Track {}", i), "Artist", 0));
    }

    for i in 0..7 {
        catalog.play_by_index(i).unwrap();
    }

    let history = catalog.history();
    assert_eq!(history.len(), 5);
    assert_eq!(
        titles(&history),
        vec!["Track 6", "Track 5", "Track 4", "Track 3", "Track 2"]
    );
}

#[test]
fn repeated_play_counts_each_call() {
    let mut catalog = catalog();
    let track = catalog.add_track(song("Loop", "Artist", 0));

    for _ in 0..3 {
        catalog.play_by_index(0).unwrap();
    }
    assert_eq!(track.play_count(), 3);
    assert_eq!(titles(&catalog.history()), vec!["Loop", "Loop", "Loop"]);
}

#[test]
fn out_of_range_play_on_empty_library() {
    let mut catalog = catalog();
    assert_eq!(
        catalog.play_by_index(0).unwrap_err(),
        CatalogError::IndexOutOfBounds { index: 0, len: 0 }
    );
}

#[test]
fn filter_with_no_matches_is_empty() {
    let mut catalog = catalog();
    catalog.add_track(song("A", "Artist", 3));
    assert!(catalog.filter_by_min_plays(4).is_empty());
}

#[test]
fn custom_history_size() {
    let config = CatalogConfig {
        history_size: 2,
        ..Default::default()
    };
    let mut catalog = CatalogService::new(config).unwrap();
    catalog.add_track(song("A", "Artist", 0));
    catalog.add_track(song("B", "Artist", 0));
    catalog.add_track(song("C", "Artist", 0));

    for i in 0..3 {
        catalog.play_by_index(i).unwrap();
    }
    assert_eq!(titles(&catalog.history()), vec!["C", "B"]);
}

#[test]
fn seeded_library_matches_defaults() {
    let mut catalog = catalog();
    catalog.seed_defaults().unwrap();

    let library = catalog.library();
    assert_eq!(library.to_string(), "Music Library (10 songs)");
    assert_eq!(library.get(0).unwrap().title(), "Midnight Rain");
    assert_eq!(library.get(9).unwrap().title(), "Heat Waves");
    assert!(catalog.playlist(FAVORITES_PLAYLIST).unwrap().is_empty());

    let hits = catalog.filter_by_min_plays(1_000_000_000);
    assert_eq!(titles(&hits), vec!["Blinding Lights"]);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let config = CatalogConfig {
        shuffle: true,
        shuffle_seed: Some(99),
        ..Default::default()
    };

    let mut first = CatalogService::new(config.clone()).unwrap();
    let mut second = CatalogService::new(config).unwrap();
    first.seed_defaults().unwrap();
    second.seed_defaults().unwrap();

    assert_eq!(
        titles(&first.library().presentation_order()),
        titles(&second.library().presentation_order())
    );
    assert_eq!(first.library().to_string(), "Music Library (10 songs), shuffled");
}

#[test]
fn removing_favorite_updates_playlist_and_history() {
    let mut catalog = catalog();
    catalog.seed_defaults().unwrap();

    let flowers = catalog.library().get(6).unwrap();
    catalog.add_to_playlist(FAVORITES_PLAYLIST, &flowers).unwrap();
    catalog.play_track(&flowers).unwrap();
    catalog.play_by_index(0).unwrap();

    catalog.remove_track(&flowers).unwrap();

    assert!(catalog.playlist(FAVORITES_PLAYLIST).unwrap().is_empty());
    assert_eq!(titles(&catalog.history()), vec!["Midnight Rain"]);
    assert_eq!(catalog.library().len(), 9);
}

#[test]
fn catalog_behind_a_mutex() {
    use std::sync::Mutex;
    use std::thread;

    let catalog = Arc::new(Mutex::new(catalog()));
    catalog
        .lock()
        .unwrap()
        .add_track(song("Shared", "Artist", 0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for _ in 0..10 {
                    catalog.lock().unwrap().play_by_index(0).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let catalog = catalog.lock().unwrap();
    assert_eq!(catalog.library().get(0).unwrap().play_count(), 40);
    assert_eq!(catalog.history().len(), 5);
}

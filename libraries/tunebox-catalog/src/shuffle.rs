//! Shuffle algorithms for presentation order
//!
//! A [`Shuffler`] produces a permutation of track indices. The collection
//! applies it on top of the canonical order, which is never touched.

use crate::types::ShuffleMode;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fmt;
use tunebox_core::TrackRef;

/// Source of presentation permutations
///
/// `permutation` must return every index in `0..tracks.len()` exactly once.
pub trait Shuffler: Send + fmt::Debug {
    /// Produce a fresh permutation for `tracks`
    fn permutation(&mut self, tracks: &[TrackRef]) -> Vec<usize>;
}

/// Build the shuffler for a mode, optionally seeded
pub fn shuffler_for(mode: ShuffleMode, seed: Option<u64>) -> Box<dyn Shuffler> {
    let rng = make_rng(seed);
    match mode {
        ShuffleMode::Random => Box::new(RandomShuffler { rng }),
        ShuffleMode::Smart => Box::new(SmartShuffler { rng }),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Check that `order` is a permutation of `0..len`
pub(crate) fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Pure random shuffle (Fisher-Yates)
///
/// Each track has equal probability of appearing at any position.
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// Shuffler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: make_rng(None),
        }
    }

    /// Reproducible shuffler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: make_rng(Some(seed)),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomShuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomShuffler").finish_non_exhaustive()
    }
}

impl Shuffler for RandomShuffler {
    fn permutation(&mut self, tracks: &[TrackRef]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..tracks.len()).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Smart shuffle
///
/// Groups tracks by artist, shuffles inside each group and the group order,
/// then deals one track per artist per round so the same artist rarely plays
/// back-to-back.
pub struct SmartShuffler {
    rng: StdRng,
}

impl SmartShuffler {
    /// Shuffler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: make_rng(None),
        }
    }

    /// Reproducible shuffler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: make_rng(Some(seed)),
        }
    }
}

impl Default for SmartShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SmartShuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartShuffler").finish_non_exhaustive()
    }
}

impl Shuffler for SmartShuffler {
    fn permutation(&mut self, tracks: &[TrackRef]) -> Vec<usize> {
        if tracks.len() <= 2 {
            let mut order: Vec<usize> = (0..tracks.len()).collect();
            order.shuffle(&mut self.rng);
            return order;
        }

        // Groups in first-seen order so a seeded run is reproducible
        let mut group_of: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, track) in tracks.iter().enumerate() {
            let slot = *group_of.entry(track.artist()).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(i);
        }

        for group in &mut groups {
            group.shuffle(&mut self.rng);
        }
        groups.shuffle(&mut self.rng);

        let mut order = Vec::with_capacity(tracks.len());
        let mut round = 0;
        while order.len() < tracks.len() {
            for group in &groups {
                if let Some(&i) = group.get(round) {
                    order.push(i);
                }
            }
            round += 1;
        }
        order
    }
}

//! Deterministic playlist generation.

use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces the id ordering the kiosk cycles through.
///
/// The caller supplies a set of unique ids; the builder never deduplicates.
#[derive(Clone, Debug, Default)]
pub struct PlaylistBuilder {
    seed: Option<u64>,
    start_poem_id: Option<String>,
}

impl PlaylistBuilder {
    pub fn new(seed: Option<u64>, start_poem_id: Option<String>) -> Self {
        Self {
            seed,
            start_poem_id,
        }
    }

    /// Build the playback order: lexicographic sort for a deterministic
    /// base, one Fisher-Yates pass (seeded when a seed was configured, a
    /// single entropy draw otherwise), then the configured start id moved
    /// to the front when present. Unknown start ids are ignored.
    pub fn build(&self, mut ids: Vec<String>) -> Vec<String> {
        if ids.is_empty() {
            return ids;
        }

        ids.sort_unstable();

        let seed = self.seed.unwrap_or_else(|| OsRng.next_u64());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        ids.shuffle(&mut rng);

        if let Some(start_id) = self.start_poem_id.as_deref() {
            if let Some(position) = ids.iter().position(|id| id == start_id) {
                let id = ids.remove(position);
                ids.insert(0, id);
            }
        }

        debug!("playlist of {} poems (seed {seed})", ids.len());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn empty_input_stays_empty() {
        let builder = PlaylistBuilder::new(Some(42), None);
        assert!(builder.build(Vec::new()).is_empty());
    }

    #[test]
    fn seeded_builds_are_deterministic() {
        let builder = PlaylistBuilder::new(Some(42), None);
        let first = builder.build(ids(&["a", "b", "c", "d", "e"]));
        let second = builder.build(ids(&["e", "d", "c", "b", "a"]));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_reorder() {
        let names = ids(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let one = PlaylistBuilder::new(Some(1), None).build(names.clone());
        let two = PlaylistBuilder::new(Some(2), None).build(names);
        assert_ne!(one, two);
    }

    #[test]
    fn playlist_is_a_permutation_of_the_input() {
        let builder = PlaylistBuilder::new(Some(7), None);
        let mut playlist = builder.build(ids(&["c", "a", "b"]));
        playlist.sort_unstable();
        assert_eq!(playlist, ids(&["a", "b", "c"]));
    }

    #[test]
    fn start_id_leads_regardless_of_seed() {
        for seed in 0..16 {
            let builder = PlaylistBuilder::new(Some(seed), Some("c".to_string()));
            let playlist = builder.build(ids(&["a", "b", "c"]));
            assert_eq!(playlist[0], "c");
        }
    }

    #[test]
    fn start_id_is_excised_from_its_shuffled_slot() {
        let names = ids(&["a", "b", "c"]);
        let shuffled = PlaylistBuilder::new(Some(1), None).build(names.clone());
        let with_start = PlaylistBuilder::new(Some(1), Some("c".to_string())).build(names);

        let remainder: Vec<&String> = shuffled.iter().filter(|id| *id != "c").collect();
        assert_eq!(with_start[0], "c");
        assert_eq!(with_start.iter().skip(1).collect::<Vec<_>>(), remainder);
    }

    #[test]
    fn unknown_start_id_is_ignored() {
        let builder = PlaylistBuilder::new(Some(1), Some("zzz".to_string()));
        let playlist = builder.build(ids(&["a", "b", "c"]));
        assert_eq!(playlist.len(), 3);
        assert!(!playlist.contains(&"zzz".to_string()));
    }
}

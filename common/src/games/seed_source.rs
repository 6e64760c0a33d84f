use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::PlayerId;

/// Inputs an apple seed may be derived from.
#[derive(Debug, Clone, Copy)]
pub struct SeedContext<'a> {
    pub player: &'a PlayerId,
    pub score: u64,
    pub body_len: usize,
}

/// Supplies a fresh seed for every apple placement.
pub trait RandomSeedSource: Send + Sync {
    fn seed(&self, context: &SeedContext<'_>) -> u64;
}

/// Derives the next candidate seed after `seed` produced a cell that collides
/// with the body cell at `index`.
pub fn rehash(seed: u64, index: usize) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_be_bytes());
    hasher.update((index as u64).to_be_bytes());
    first_u64(&hasher.finalize())
}

fn first_u64(digest: &[u8]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Production source: process entropy, wall clock and the caller's context
/// folded through SHA-256. Not cryptographically meaningful, only unpredictable
/// to the player.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropySeedSource;

impl EntropySeedSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSeedSource for EntropySeedSource {
    fn seed(&self, context: &SeedContext<'_>) -> u64 {
        let entropy: u64 = rand::rng().random();
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(entropy.to_be_bytes());
        hasher.update(nanos.to_be_bytes());
        hasher.update(context.player.as_str().as_bytes());
        hasher.update(context.score.to_be_bytes());
        hasher.update((context.body_len as u64).to_be_bytes());
        first_u64(&hasher.finalize())
    }
}

/// Replays a fixed list of seeds in order, starting over when exhausted.
#[derive(Debug)]
pub struct ScriptedSeedSource {
    seeds: Mutex<VecDeque<u64>>,
}

impl ScriptedSeedSource {
    pub fn new(seeds: impl IntoIterator<Item = u64>) -> Self {
        let seeds: VecDeque<u64> = seeds.into_iter().collect();
        assert!(!seeds.is_empty(), "ScriptedSeedSource needs at least one seed");
        Self {
            seeds: Mutex::new(seeds),
        }
    }

    pub fn constant(seed: u64) -> Self {
        Self::new([seed])
    }
}

impl RandomSeedSource for ScriptedSeedSource {
    fn seed(&self, _context: &SeedContext<'_>) -> u64 {
        let mut seeds = match self.seeds.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let seed = seeds.pop_front().unwrap_or_default();
        seeds.push_back(seed);
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(player: &PlayerId) -> SeedContext<'_> {
        SeedContext {
            player,
            score: 0,
            body_len: 3,
        }
    }

    #[test]
    fn test_rehash_is_deterministic() {
        assert_eq!(rehash(1285, 1), rehash(1285, 1));
    }

    #[test]
    fn test_rehash_depends_on_seed_and_index() {
        assert_ne!(rehash(1285, 1), rehash(1285, 2));
        assert_ne!(rehash(1285, 1), rehash(1286, 1));
        assert_ne!(rehash(1285, 1), 1285);
    }

    #[test]
    fn test_scripted_source_cycles() {
        let player = PlayerId::from("alice");
        let source = ScriptedSeedSource::new([7, 8]);
        let seeds: Vec<u64> = (0..5).map(|_| source.seed(&context(&player))).collect();
        assert_eq!(seeds, vec![7, 8, 7, 8, 7]);
    }

    #[test]
    fn test_entropy_source_varies_between_calls() {
        let player = PlayerId::from("alice");
        let source = EntropySeedSource::new();
        let first = source.seed(&context(&player));
        let differs = (0..8).any(|_| source.seed(&context(&player)) != first);
        assert!(differs);
    }
}

//! Explicit RNG construction with ChaCha8.
//!
//! Randomness is always dependency-injected: the two functions here are the
//! only places a generator is created. Same seed -> same instance, always.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG for a single instance generation.
///
/// `None` seeds from OS entropy for throwaway instances; pass `Some` to make
/// the generation reproducible.
pub fn instance_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Derive an independent per-cell seed from a global one.
///
/// Used by batch runs so each (n, pattern) cell owns its own stream and can
/// be regenerated in isolation.
pub fn derived_seed(global_seed: u64, cell_id: u64) -> u64 {
    global_seed.wrapping_add(cell_id)
}

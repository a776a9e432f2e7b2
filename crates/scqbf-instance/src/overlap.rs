//! Overlapping ("hard") subset sampling.
//!
//! All `n` subsets share one random base set of `n / 10` elements. Each
//! subset takes a thin sub-sample of the base plus an independent random
//! perturbation, so subsets partially share membership while keeping their
//! own randomness. Elevated overlap gives the covering side of the problem
//! many interchangeable options and makes the selection trade-off harder
//! than plain uniform sampling does.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::subset::sample_universe;
use crate::Pattern;

/// Sample `n` subsets with deliberately elevated pairwise overlap.
///
/// The base sub-sample size is `min(1, |base| / 2)`: one element once the
/// base has at least two, zero below that. The coupling is intentionally
/// thin; most of the shared mass arrives through the perturbation draws
/// re-hitting base elements. Kept as-is for reproducibility with existing
/// instance sets.
pub fn sample_overlapping_subsets(
    n: usize,
    pattern: Pattern,
    rng: &mut ChaCha8Rng,
) -> Vec<BTreeSet<u32>> {
    let base: Vec<u32> = rand::seq::index::sample(rng, n, n / 10)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect();

    (0..n)
        .map(|_| {
            let target = pattern.target_size(n, rng).min(n);

            let coupling = (base.len() / 2).min(1);
            let mut subset: BTreeSet<u32> = base.choose_multiple(rng, coupling).copied().collect();

            let perturbation = rng.gen_range(1..=target.max(1));
            subset.extend(sample_universe(n, perturbation, rng));
            subset
        })
        .collect()
}

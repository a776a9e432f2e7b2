//! Uniform random subset sampling.
//!
//! Produces one subset per selection variable: `n` without-replacement
//! samples from the universe `1..=n`, sized by the [`Pattern`]. Coverage of
//! the whole universe is a separate pass (`coverage`); nothing here prevents
//! two subsets from being equal or an element from being missed.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::Pattern;

/// Sample `n` subsets of the universe `1..=n` under the given pattern.
pub fn sample_subsets(n: usize, pattern: Pattern, rng: &mut ChaCha8Rng) -> Vec<BTreeSet<u32>> {
    (0..n)
        .map(|_| {
            let target = pattern.target_size(n, rng).min(n);
            sample_universe(n, target, rng)
        })
        .collect()
}

/// Draw `amount` distinct elements from `1..=n`, uniformly.
///
/// `amount` must not exceed `n`; callers cap the pattern target first.
pub(crate) fn sample_universe(n: usize, amount: usize, rng: &mut ChaCha8Rng) -> BTreeSet<u32> {
    rand::seq::index::sample(rng, n, amount)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_produces_one_subset_per_variable() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let subsets = sample_subsets(25, Pattern::Small, &mut rng);
        assert_eq!(subsets.len(), 25);
    }

    #[test]
    fn test_members_stay_in_universe() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for pattern in [Pattern::Small, Pattern::Medium, Pattern::Mixed] {
            let subsets = sample_subsets(30, pattern, &mut rng);
            for subset in &subsets {
                assert!(!subset.is_empty());
                assert!(subset.iter().all(|&e| (1..=30).contains(&e)));
            }
        }
    }

    #[test]
    fn test_fixed_patterns_hit_their_target_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let small = sample_subsets(36, Pattern::Small, &mut rng);
        assert!(small.iter().all(|s| s.len() == 6));

        let medium = sample_subsets(36, Pattern::Medium, &mut rng);
        assert!(medium.iter().all(|s| s.len() == 9));
    }

    #[test]
    fn test_single_element_universe() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for pattern in [Pattern::Small, Pattern::Medium, Pattern::Mixed] {
            let subsets = sample_subsets(1, pattern, &mut rng);
            assert_eq!(subsets, vec![BTreeSet::from([1])]);
        }
    }

    #[test]
    fn test_same_seed_same_subsets() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(5);
        let mut rng2 = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            sample_subsets(20, Pattern::Mixed, &mut rng1),
            sample_subsets(20, Pattern::Mixed, &mut rng2)
        );
    }
}

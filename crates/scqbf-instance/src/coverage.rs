//! Coverage repair: make every universe element appear in some subset.
//!
//! A greedy single-append pass. Each missing element is inserted into one
//! uniformly chosen subset; a subset may receive several elements, and no
//! attempt is made to balance sizes or minimize total additions beyond one
//! insert per missing element.

use std::collections::BTreeSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::GenError;

/// What the repair pass changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRepair {
    /// How many universe elements were missing before the pass.
    pub missing: usize,
    /// Which subset received each missing element, in ascending element order.
    pub touched: Vec<usize>,
}

impl CoverageRepair {
    /// True when the collection already covered the universe.
    pub fn was_complete(&self) -> bool {
        self.missing == 0
    }
}

/// Insert every uncovered element of `1..=n` into one random subset.
///
/// Missing elements are processed in ascending order, so a fixed seed stream
/// gives a fixed repair. The collection length must be exactly `n`; anything
/// else is a caller bug and is rejected before any mutation.
pub fn ensure_coverage(
    subsets: &mut [BTreeSet<u32>],
    n: usize,
    rng: &mut ChaCha8Rng,
) -> Result<CoverageRepair, GenError> {
    if subsets.len() != n {
        return Err(GenError::CollectionLength {
            expected: n,
            got: subsets.len(),
        });
    }

    let present: BTreeSet<u32> = subsets.iter().flatten().copied().collect();
    let missing: Vec<u32> = (1..=n as u32).filter(|e| !present.contains(e)).collect();

    let mut touched = Vec::with_capacity(missing.len());
    for element in &missing {
        let index = rng.gen_range(0..subsets.len());
        subsets[index].insert(*element);
        touched.push(index);
    }

    Ok(CoverageRepair {
        missing: missing.len(),
        touched,
    })
}

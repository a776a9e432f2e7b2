//! Instance assembly: parameters in, frozen `(n, S, A)` triple out.
//!
//! Assembly validates parameters before any sampling, runs coverage repair
//! on whichever subset collection the variant produced, and finishes with a
//! defensive full-coverage check. A downstream solver would surface a
//! missed element as infeasibility anyway; the check here turns that silent
//! failure into an explicit error at the point the invariant is owed.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::coverage::ensure_coverage;
use crate::overlap::sample_overlapping_subsets;
use crate::rng::instance_rng;
use crate::subset::sample_subsets;
use crate::weights::{sample_weights, WeightMatrix, WeightRange};
use crate::{GenError, Pattern};

/// A complete MAX-SC-QBF instance. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    n: usize,
    subsets: Vec<BTreeSet<u32>>,
    weights: WeightMatrix,
}

impl Instance {
    /// Build an instance from pre-existing parts, validating shape and
    /// member bounds. Coverage is NOT checked here: externally supplied
    /// collections may legitimately be broken, and the linearized model
    /// they produce is then infeasible rather than malformed.
    pub fn from_parts(
        n: usize,
        subsets: Vec<BTreeSet<u32>>,
        weights: WeightMatrix,
    ) -> Result<Self, GenError> {
        if n == 0 {
            return Err(GenError::EmptyUniverse);
        }
        if subsets.len() != n {
            return Err(GenError::CollectionLength {
                expected: n,
                got: subsets.len(),
            });
        }
        if weights.n() != n {
            return Err(GenError::MatrixShape {
                expected: n,
                rows: weights.n(),
                cols: weights.n(),
            });
        }
        for subset in &subsets {
            for &element in subset {
                if element < 1 || element as usize > n {
                    return Err(GenError::ElementOutOfRange { element, n });
                }
            }
        }
        Ok(Self {
            n,
            subsets,
            weights,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn subsets(&self) -> &[BTreeSet<u32>] {
        &self.subsets
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Universe elements no subset contains, in ascending order.
    pub fn uncovered_elements(&self) -> Vec<u32> {
        let present: BTreeSet<u32> = self.subsets.iter().flatten().copied().collect();
        (1..=self.n as u32).filter(|e| !present.contains(e)).collect()
    }

    /// Error out on the first element no subset covers.
    pub fn verify_coverage(&self) -> Result<(), GenError> {
        match self.uncovered_elements().first() {
            Some(&element) => Err(GenError::UncoveredElement { element }),
            None => Ok(()),
        }
    }
}

/// Which generation policy produced an instance.
///
/// The weight range rides along with the subset policy: plain instances get
/// the mild range, overlapping ones the adversarial range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Plain,
    Hard,
}

impl Variant {
    /// Generate an instance under this variant's policies.
    pub fn generate(
        &self,
        n: usize,
        pattern: Pattern,
        seed: Option<u64>,
    ) -> Result<Instance, GenError> {
        match self {
            Variant::Plain => generate(n, pattern, seed),
            Variant::Hard => generate_hard(n, pattern, seed),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Plain => write!(f, "plain"),
            Variant::Hard => write!(f, "hard"),
        }
    }
}

/// Generate a plain instance: uniform subsets, standard weight range.
pub fn generate(n: usize, pattern: Pattern, seed: Option<u64>) -> Result<Instance, GenError> {
    assemble(n, pattern, seed, sample_subsets, WeightRange::STANDARD)
}

/// Generate an overlapping instance: shared-base subsets, adversarial
/// weight range.
pub fn generate_hard(n: usize, pattern: Pattern, seed: Option<u64>) -> Result<Instance, GenError> {
    assemble(
        n,
        pattern,
        seed,
        sample_overlapping_subsets,
        WeightRange::ADVERSARIAL,
    )
}

fn assemble(
    n: usize,
    pattern: Pattern,
    seed: Option<u64>,
    sampler: fn(usize, Pattern, &mut ChaCha8Rng) -> Vec<BTreeSet<u32>>,
    range: WeightRange,
) -> Result<Instance, GenError> {
    if n == 0 {
        return Err(GenError::EmptyUniverse);
    }

    let mut rng = instance_rng(seed);
    let mut subsets = sampler(n, pattern, &mut rng);
    ensure_coverage(&mut subsets, n, &mut rng)?;
    let weights = sample_weights(n, range, &mut rng);

    let instance = Instance::from_parts(n, subsets, weights)?;
    instance.verify_coverage()?;
    Ok(instance)
}

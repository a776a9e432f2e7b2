//! Synthetic MAX-SC-QBF benchmark instances.
//!
//! An instance is a triple `(n, S, A)`:
//! - a universe `1..=n`,
//! - a collection `S` of `n` subsets of the universe, one per selection
//!   variable, with every universe element covered by at least one subset,
//! - an upper-triangular matrix `A` of pairwise integer rewards.
//!
//! Generation is seeded and reproducible: every sampling function takes an
//! explicit `ChaCha8Rng`, and the same seed with the same parameters yields
//! the same instance, entry for entry. There is no ambient random state.

pub mod assemble;
pub mod coverage;
pub mod format;
pub mod overlap;
pub mod rng;
pub mod subset;
pub mod weights;

use serde::{Deserialize, Serialize};

pub use assemble::{generate, generate_hard, Instance, Variant};
pub use coverage::{ensure_coverage, CoverageRepair};
pub use format::{parse_text, to_text, FormatError};
pub use weights::{WeightMatrix, WeightRange};

/// Errors raised while building an instance.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("universe must contain at least one element")]
    EmptyUniverse,

    #[error("unknown subset pattern index {0} (expected 1, 2, or 3)")]
    UnknownPattern(u8),

    #[error("subset collection has {got} subsets, expected {expected}")]
    CollectionLength { expected: usize, got: usize },

    #[error("subset member {element} lies outside the universe 1..={n}")]
    ElementOutOfRange { element: u32, n: usize },

    #[error("weight matrix is {rows}x{cols}, expected {expected}x{expected}")]
    MatrixShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("element {element} is covered by no subset")]
    UncoveredElement { element: u32 },
}

/// Subset cardinality policy. Controls how large each sampled subset aims
/// to be, never which elements it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Subsets of roughly `sqrt(n)` elements.
    Small,
    /// Subsets of roughly `n / 4` elements.
    Medium,
    /// Per-subset uniform size in `1..=max(1, n / 2)`.
    Mixed,
}

impl Pattern {
    /// Parse the conventional 1-based pattern index.
    pub fn from_index(index: u8) -> Result<Self, GenError> {
        match index {
            1 => Ok(Pattern::Small),
            2 => Ok(Pattern::Medium),
            3 => Ok(Pattern::Mixed),
            other => Err(GenError::UnknownPattern(other)),
        }
    }

    /// The conventional 1-based index, round-tripping `from_index`.
    pub fn index(&self) -> u8 {
        match self {
            Pattern::Small => 1,
            Pattern::Medium => 2,
            Pattern::Mixed => 3,
        }
    }

    /// Target cardinality for one subset of a size-`n` universe.
    ///
    /// `Small` and `Medium` are fixed per universe; `Mixed` draws a fresh
    /// size for every subset, which is why this takes the RNG.
    pub fn target_size(&self, n: usize, rng: &mut rand_chacha::ChaCha8Rng) -> usize {
        use rand::Rng;
        match self {
            Pattern::Small => ((n as f64).sqrt() as usize).max(1),
            Pattern::Medium => (n / 4).max(1),
            Pattern::Mixed => rng.gen_range(1..=(n / 2).max(1)),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

//! Pairwise reward matrices.
//!
//! `A[i][j]` with `i <= j` is the reward for jointly selecting subsets `i`
//! and `j` (`i == j` is the self reward). The strict lower triangle is
//! stored as zero and never read.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::GenError;

/// Inclusive integer range weights are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRange {
    pub lo: i32,
    pub hi: i32,
}

impl WeightRange {
    /// Mild spread for generic instances.
    pub const STANDARD: WeightRange = WeightRange { lo: -5, hi: 10 };

    /// Wide spread for overlapping ("hard") instances; the larger magnitudes
    /// make the objective far more sensitive to each selection.
    pub const ADVERSARIAL: WeightRange = WeightRange { lo: -100, hi: 100 };

    pub fn contains(&self, weight: i32) -> bool {
        (self.lo..=self.hi).contains(&weight)
    }
}

/// Upper-triangular `n x n` reward matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMatrix {
    n: usize,
    rows: Vec<Vec<i32>>,
}

impl WeightMatrix {
    /// Wrap pre-built rows, rejecting non-square shapes.
    pub fn from_rows(n: usize, rows: Vec<Vec<i32>>) -> Result<Self, GenError> {
        if rows.len() != n || rows.iter().any(|row| row.len() != n) {
            return Err(GenError::MatrixShape {
                expected: n,
                rows: rows.len(),
                cols: rows.first().map(|row| row.len()).unwrap_or(0),
            });
        }
        Ok(Self { n, rows })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Reward for the ordered pair `(i, j)`. Only `i <= j` is meaningful.
    pub fn get(&self, i: usize, j: usize) -> i32 {
        debug_assert!(i <= j, "lower-triangular entries are never read");
        self.rows[i][j]
    }

    /// Full rows, including the zero lower triangle, for serialization.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

/// Draw an upper-triangular matrix with every `i <= j` entry uniform in
/// `range` and every `i > j` entry zero.
pub fn sample_weights(n: usize, range: WeightRange, rng: &mut ChaCha8Rng) -> WeightMatrix {
    let mut rows = vec![vec![0i32; n]; n];
    for (i, row) in rows.iter_mut().enumerate() {
        for entry in row.iter_mut().skip(i) {
            *entry = rng.gen_range(range.lo..=range.hi);
        }
    }
    WeightMatrix { n, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_shape_and_triangle() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let matrix = sample_weights(12, WeightRange::STANDARD, &mut rng);

        assert_eq!(matrix.n(), 12);
        assert_eq!(matrix.rows().len(), 12);
        for (i, row) in matrix.rows().iter().enumerate() {
            assert_eq!(row.len(), 12);
            for (j, &entry) in row.iter().enumerate() {
                if i > j {
                    assert_eq!(entry, 0);
                } else {
                    assert!(WeightRange::STANDARD.contains(entry));
                }
            }
        }
    }

    #[test]
    fn test_adversarial_range_is_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let matrix = sample_weights(20, WeightRange::ADVERSARIAL, &mut rng);
        for (i, row) in matrix.rows().iter().enumerate() {
            for &entry in row.iter().skip(i) {
                assert!(WeightRange::ADVERSARIAL.contains(entry));
            }
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(5);
        let mut rng2 = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            sample_weights(15, WeightRange::STANDARD, &mut rng1),
            sample_weights(15, WeightRange::STANDARD, &mut rng2)
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = WeightMatrix::from_rows(2, vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, GenError::MatrixShape { expected: 2, .. }));

        let err = WeightMatrix::from_rows(3, vec![vec![0; 3]; 2]).unwrap_err();
        assert!(matches!(
            err,
            GenError::MatrixShape {
                expected: 3,
                rows: 2,
                ..
            }
        ));
    }
}

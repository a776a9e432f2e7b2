//! QBF linearization.
//!
//! The quadratic objective `max sum A[i][j] * x_i * x_j` over `i <= j` is
//! rewritten with one binary auxiliary `y_ij` per pair and three rows per
//! pair that pin `y_ij = x_i * x_j` at every integer point:
//!
//! ```text
//! y_ij <= x_i
//! y_ij <= x_j
//! y_ij >= x_i + x_j - 1
//! ```
//!
//! This is the tightest linear relaxation of a product of two binaries, and
//! exact for them; on the diagonal the three rows collapse to `y_ii = x_i`.
//! Coverage is one row per universe element: at least one selected subset
//! must contain it.
//!
//! The encoder emits the full quadratic-size formulation with no
//! simplification, symmetry breaking, or redundant-row elimination, and it
//! never inspects the coverage invariant: an element no subset contains
//! yields the empty row `0 >= 1` for the downstream solver to reject.

use scqbf_instance::Instance;

use crate::linear::{
    Constraint, ConstraintKind, LinExpr, LinearModel, Sense, VarId, VarKind, VarTable,
};

/// Linearize an instance. Infallible: every well-formed instance has a
/// well-formed (if possibly infeasible) model.
pub fn encode(instance: &Instance) -> LinearModel {
    let n = instance.n();
    let mut vars = VarTable::new();

    let select: Vec<VarId> = (0..n)
        .map(|i| vars.push(VarKind::Select { subset: i }))
        .collect();

    // Pair variables in row-major (i, j >= i) order.
    let mut pair = Vec::with_capacity(n * (n + 1) / 2);
    for i in 0..n {
        for j in i..n {
            pair.push(vars.push(VarKind::Pair { i, j }));
        }
    }
    let pair_at = |i: usize, j: usize| -> VarId {
        // Offset of row i in the flattened upper triangle.
        let row_start = i * n - i * (i + 1) / 2 + i;
        pair[row_start + (j - i)]
    };

    let mut objective = LinExpr::new();
    for i in 0..n {
        for j in i..n {
            objective.push(instance.weights().get(i, j) as i64, pair_at(i, j));
        }
    }

    let mut constraints = Vec::with_capacity(3 * n * (n + 1) / 2 + n);
    for i in 0..n {
        for j in i..n {
            let y = pair_at(i, j);
            constraints.push(Constraint {
                kind: ConstraintKind::PairUpperI { i, j },
                lhs: LinExpr::term(1, y).plus(-1, select[i]),
                sense: Sense::Le,
                rhs: 0,
            });
            constraints.push(Constraint {
                kind: ConstraintKind::PairUpperJ { i, j },
                lhs: LinExpr::term(1, y).plus(-1, select[j]),
                sense: Sense::Le,
                rhs: 0,
            });
            constraints.push(Constraint {
                kind: ConstraintKind::PairLower { i, j },
                lhs: LinExpr::term(1, y).plus(-1, select[i]).plus(-1, select[j]),
                sense: Sense::Ge,
                rhs: -1,
            });
        }
    }

    for element in 1..=n as u32 {
        let mut lhs = LinExpr::new();
        for (index, subset) in instance.subsets().iter().enumerate() {
            if subset.contains(&element) {
                lhs.push(1, select[index]);
            }
        }
        constraints.push(Constraint {
            kind: ConstraintKind::Cover { element },
            lhs,
            sense: Sense::Ge,
            rhs: 1,
        });
    }

    LinearModel {
        vars,
        objective,
        constraints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use scqbf_instance::WeightMatrix;

    fn tiny_instance() -> Instance {
        let subsets = vec![
            BTreeSet::from([1, 2]),
            BTreeSet::from([2, 3]),
            BTreeSet::from([1]),
        ];
        let weights =
            WeightMatrix::from_rows(3, vec![vec![1, 2, 3], vec![0, 4, 5], vec![0, 0, 6]]).unwrap();
        Instance::from_parts(3, subsets, weights).unwrap()
    }

    #[test]
    fn test_pair_variables_enumerate_the_upper_triangle() {
        let model = encode(&tiny_instance());
        let pairs: Vec<(usize, usize)> = model
            .vars
            .iter()
            .filter_map(|(_, kind)| match kind {
                VarKind::Pair { i, j } => Some((i, j)),
                _ => None,
            })
            .collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_objective_carries_every_upper_triangle_weight() {
        let model = encode(&tiny_instance());
        let coeffs: Vec<i64> = model.objective.terms().iter().map(|t| t.coeff).collect();
        assert_eq!(coeffs, vec![1, 2, 3, 4, 5, 6]);
    }
}

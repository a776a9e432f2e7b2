//! SAT feasibility probe.
//!
//! Every row of the linearized model is a boolean condition over binaries,
//! so the constraint system translates clause for clause:
//!
//! - `y_ij <= x_i`           -> `(!y_ij | x_i)`
//! - `y_ij <= x_j`           -> `(!y_ij | x_j)`
//! - `y_ij >= x_i + x_j - 1` -> `(y_ij | !x_i | !x_j)`
//! - cover row for `k`       -> one positive clause over the selecting `x`
//!
//! An uncovered element's empty cover row becomes the empty clause, so a
//! broken instance is reported as plain infeasibility — the same safety net
//! a real MILP backend provides.

use std::time::{Duration, Instant};

use varisat::{solver::Solver, ExtendFormula, Lit, Var};

use scqbf_model::linear::{Constraint, LinearModel, Sense, VarId};

use crate::{MilpSolver, SolveError, SolveOutcome};

/// One-shot SAT backend: proves or refutes feasibility and scores the
/// point it finds. Makes no optimality claim, so `gap` is always absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeasibilityProbe;

impl FeasibilityProbe {
    pub fn new() -> Self {
        Self
    }
}

fn lit(id: VarId, is_positive: bool) -> Lit {
    let var = Var::from_index(id.0);
    if is_positive {
        var.positive()
    } else {
        var.negative()
    }
}

/// Translate one row into its clause.
///
/// Model rows have unit coefficients and a rhs that makes the row violable
/// in exactly one way: an `<=` row breaks only when every positive term is
/// on and every negative term off, a `>=` row only in the mirrored case.
/// The clause forbids that single violating pattern.
fn clause_for(constraint: &Constraint) -> Vec<Lit> {
    constraint
        .lhs
        .terms()
        .iter()
        .map(|term| match constraint.sense {
            Sense::Le => lit(term.var, term.coeff < 0),
            Sense::Ge => lit(term.var, term.coeff > 0),
        })
        .collect()
}

/// Read a satisfying assignment back into model-variable order.
fn decode_model(num_vars: usize, sat_model: &[Lit]) -> Vec<bool> {
    let mut assignment = vec![false; num_vars];
    for l in sat_model {
        let index = l.var().index();
        if index < num_vars {
            assignment[index] = l.is_positive();
        }
    }
    assignment
}

impl MilpSolver for FeasibilityProbe {
    /// The probe makes exactly one solver call and returns promptly at
    /// benchmark sizes, so the time limit is accepted but not enforced.
    fn solve(
        &self,
        model: &LinearModel,
        _time_limit: Duration,
    ) -> Result<SolveOutcome, SolveError> {
        let start = Instant::now();
        let mut solver = Solver::new();

        // Register every model variable with a tautology so the solver
        // tracks variables no clause mentions.
        for index in 0..model.num_vars() {
            let var = Var::from_index(index);
            solver.add_clause(&[var.positive(), var.negative()]);
        }

        for constraint in &model.constraints {
            solver.add_clause(&clause_for(constraint));
        }

        match solver.solve() {
            Ok(true) => {
                let sat_model = solver
                    .model()
                    .ok_or_else(|| SolveError::Backend("SAT but no model returned".to_string()))?;
                let assignment = decode_model(model.num_vars(), &sat_model);
                Ok(SolveOutcome {
                    objective: Some(model.objective_value(&assignment)),
                    gap: None,
                    runtime: start.elapsed(),
                })
            }
            Ok(false) => Ok(SolveOutcome {
                objective: None,
                gap: None,
                runtime: start.elapsed(),
            }),
            Err(e) => Err(SolveError::Backend(e.to_string())),
        }
    }
}

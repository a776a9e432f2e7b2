//! The external-solver boundary.
//!
//! A linearized model crosses this boundary together with a time limit; an
//! outcome comes back. "No feasible solution found within the limit" is a
//! normal outcome (objective and gap both absent), never an error — errors
//! are reserved for the backend itself failing.
//!
//! The crate ships no optimization algorithm. [`FeasibilityProbe`] is the
//! one in-tree backend: a single SAT call that proves or refutes
//! feasibility and reports the objective at the point it finds, with no
//! optimality claim.

pub mod feasibility;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use scqbf_model::LinearModel;

pub use feasibility::FeasibilityProbe;

/// What came back from one solve call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// Objective at the best point found; absent when no feasible point
    /// was found within the limit.
    pub objective: Option<i64>,
    /// Relative optimality gap, when the backend proves one. Absent for
    /// infeasible outcomes and for backends that make no optimality claim.
    pub gap: Option<f64>,
    /// Wall-clock time the backend spent.
    pub runtime: Duration,
}

impl SolveOutcome {
    pub fn found_solution(&self) -> bool {
        self.objective.is_some()
    }
}

/// Errors from the solving backend itself.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("solver backend error: {0}")]
    Backend(String),
}

/// A mixed-integer solver for linearized models.
pub trait MilpSolver {
    fn solve(&self, model: &LinearModel, time_limit: Duration)
        -> Result<SolveOutcome, SolveError>;
}

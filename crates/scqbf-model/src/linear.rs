//! Vocabulary of the linearized model.
//!
//! Every variable is binary. An assignment is a `&[bool]` indexed by
//! `VarId`; evaluation helpers let tests and probe backends check
//! feasibility and score candidate points without committing to any
//! particular solver's representation.

use serde::{Deserialize, Serialize};

/// Dense index of a decision variable within one model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VarId(pub usize);

/// What a variable stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    /// `x_i`: subset `i` is selected.
    Select { subset: usize },
    /// `y_ij` with `i <= j`: both `i` and `j` are selected.
    Pair { i: usize, j: usize },
}

/// Registry of all variables in a model, in id order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VarTable {
    kinds: Vec<VarKind>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable, returning its dense id.
    pub fn push(&mut self, kind: VarKind) -> VarId {
        let id = VarId(self.kinds.len());
        self.kinds.push(kind);
        id
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kind(&self, id: VarId) -> VarKind {
        self.kinds[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, VarKind)> + '_ {
        self.kinds.iter().enumerate().map(|(i, &k)| (VarId(i), k))
    }

    /// Solver-facing display name: `x_i` or `y_i_j`.
    pub fn name(&self, id: VarId) -> String {
        match self.kind(id) {
            VarKind::Select { subset } => format!("x_{subset}"),
            VarKind::Pair { i, j } => format!("y_{i}_{j}"),
        }
    }
}

/// One `coeff * var` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinTerm {
    pub coeff: i64,
    pub var: VarId,
}

/// A sum of terms. Duplicate variables are allowed and simply accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinExpr {
    terms: Vec<LinTerm>,
}

impl LinExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(coeff: i64, var: VarId) -> Self {
        Self {
            terms: vec![LinTerm { coeff, var }],
        }
    }

    /// Builder-style append.
    pub fn plus(mut self, coeff: i64, var: VarId) -> Self {
        self.push(coeff, var);
        self
    }

    pub fn push(&mut self, coeff: i64, var: VarId) {
        self.terms.push(LinTerm { coeff, var });
    }

    pub fn terms(&self) -> &[LinTerm] {
        &self.terms
    }

    /// Value of the expression at a binary point. The assignment must cover
    /// every referenced variable id.
    pub fn eval(&self, assignment: &[bool]) -> i64 {
        self.terms
            .iter()
            .map(|t| if assignment[t.var.0] { t.coeff } else { 0 })
            .sum()
    }
}

/// Row comparison direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sense {
    Le,
    Ge,
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sense::Le => write!(f, "<="),
            Sense::Ge => write!(f, ">="),
        }
    }
}

/// Which structural row a constraint is. The algebraic `lhs/sense/rhs` view
/// serves any MILP consumer; the kind keeps the boolean structure available
/// to backends that exploit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// `y_ij <= x_i`
    PairUpperI { i: usize, j: usize },
    /// `y_ij <= x_j`
    PairUpperJ { i: usize, j: usize },
    /// `y_ij >= x_i + x_j - 1`
    PairLower { i: usize, j: usize },
    /// `sum of x over subsets containing the element >= 1`
    Cover { element: u32 },
}

/// One linear row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub lhs: LinExpr,
    pub sense: Sense,
    pub rhs: i64,
}

impl Constraint {
    pub fn satisfied_by(&self, assignment: &[bool]) -> bool {
        let value = self.lhs.eval(assignment);
        match self.sense {
            Sense::Le => value <= self.rhs,
            Sense::Ge => value >= self.rhs,
        }
    }
}

/// The assembled maximization model. Immutable once encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearModel {
    pub vars: VarTable,
    /// Maximized objective.
    pub objective: LinExpr,
    pub constraints: Vec<Constraint>,
}

impl LinearModel {
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn num_select_vars(&self) -> usize {
        self.vars
            .iter()
            .filter(|(_, k)| matches!(k, VarKind::Select { .. }))
            .count()
    }

    pub fn num_pair_vars(&self) -> usize {
        self.vars
            .iter()
            .filter(|(_, k)| matches!(k, VarKind::Pair { .. }))
            .count()
    }

    pub fn num_linking_constraints(&self) -> usize {
        self.constraints
            .iter()
            .filter(|c| !matches!(c.kind, ConstraintKind::Cover { .. }))
            .count()
    }

    pub fn num_cover_constraints(&self) -> usize {
        self.constraints
            .iter()
            .filter(|c| matches!(c.kind, ConstraintKind::Cover { .. }))
            .count()
    }

    pub fn objective_value(&self, assignment: &[bool]) -> i64 {
        self.objective.eval(assignment)
    }

    pub fn is_feasible(&self, assignment: &[bool]) -> bool {
        self.constraints.iter().all(|c| c.satisfied_by(assignment))
    }
}

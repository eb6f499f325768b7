//! # Solver configuration
//!
//! Tolerances and budgets are passed into every solver call by value. There is no process wide
//! state.
use num_traits::Float;

use crate::data::linear_program::elements::Objective;
use crate::data::number_types::float::constant;

/// Settings for the two phase Simplex method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LpConfig<F = f64> {
    /// Whether to minimize or maximize the objective.
    pub objective: Objective,
    /// Tolerance used in every comparison with zero.
    pub eps: F,
    /// Maximum number of pivots, summed over both phases.
    pub max_iter: usize,
}

impl<F: Float> Default for LpConfig<F> {
    fn default() -> Self {
        Self {
            objective: Objective::Minimize,
            eps: constant(1e-10),
            max_iter: 100_000,
        }
    }
}

impl<F> LpConfig<F> {
    /// Maximize instead of minimize.
    #[must_use]
    pub fn maximize(self) -> Self {
        self.with_minimize(false)
    }

    /// Set the direction of optimization from a `minimize` flag.
    #[must_use]
    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.objective = Objective::from(minimize);
        self
    }

    /// Set the numerical tolerance.
    #[must_use]
    pub fn with_eps(mut self, eps: F) -> Self {
        self.eps = eps;
        self
    }

    /// Set the pivot budget.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

/// Settings for branch and bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MilpConfig<F = f64> {
    /// Whether to minimize or maximize the objective.
    pub objective: Objective,
    /// Tolerance for integrality, pruning and the relaxations.
    pub eps: F,
    /// Maximum number of pivots per relaxation.
    pub max_iter: usize,
    /// Maximum number of nodes explored in the tree.
    pub max_nodes: usize,
    /// The search stops once the relative gap between a new incumbent and the bound of the node
    /// it came from drops below this value.
    pub gap_tol: F,
}

impl<F: Float> Default for MilpConfig<F> {
    fn default() -> Self {
        Self {
            objective: Objective::Minimize,
            eps: constant(1e-6),
            max_iter: 10_000,
            max_nodes: 100_000,
            gap_tol: constant(1e-6),
        }
    }
}

impl<F: Copy> MilpConfig<F> {
    /// Maximize instead of minimize.
    #[must_use]
    pub fn maximize(self) -> Self {
        self.with_minimize(false)
    }

    /// Set the direction of optimization from a `minimize` flag.
    #[must_use]
    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.objective = Objective::from(minimize);
        self
    }

    /// Set the numerical tolerance.
    #[must_use]
    pub fn with_eps(mut self, eps: F) -> Self {
        self.eps = eps;
        self
    }

    /// Set the pivot budget of each relaxation.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the gap at which the search may stop early.
    #[must_use]
    pub fn with_gap_tol(mut self, gap_tol: F) -> Self {
        self.gap_tol = gap_tol;
        self
    }

    /// Settings for the relaxations solved at each node.
    #[must_use]
    pub fn lp_config(&self) -> LpConfig<F> {
        LpConfig {
            objective: self.objective,
            eps: self.eps,
            max_iter: self.max_iter,
        }
    }
}

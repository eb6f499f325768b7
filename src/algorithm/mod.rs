//! # Algorithms
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::data::linear_program::config::LpConfig;
use crate::data::linear_program::solution::Solution;

pub mod branch_and_bound;
pub mod two_phase;

/// A problem formulation of which a relaxation can be solved.
///
/// In the case of linear programming, that means that integer constraints are ignored. Branch and
/// bound solves many relaxations of differently bounded versions of the same problem.
pub trait SolveRelaxation<F>: MatrixProvider<F> {
    /// Solve the relaxed version of this problem.
    ///
    /// # Return value
    ///
    /// Value of each of the `self.nr_columns()` variables, the objective value and a status
    /// describing whether the problem is infeasible, unbounded or has a finite optimum.
    fn solve_relaxation(&self, config: LpConfig<F>) -> Solution<Vec<F>, F>;
}

/// Outcome of running the primal Simplex method on a tableau that is in a basic feasible solution
/// state.
///
/// It cannot be infeasible, as a feasible solution is needed to start.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum OptimizationResult {
    FiniteOptimum,
    Unbounded,
    MaxIter,
}

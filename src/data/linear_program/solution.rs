//! # Representation of solver outcomes
//!
//! Every solver returns the same record: a solution, its objective value, two effort counters and
//! a status. Only the representation of the solution differs between solvers, which is why the
//! record is generic over it.
use crate::data::linear_program::elements::Status;

/// The result of a solver call.
///
/// Immutable once constructed; fields are read through accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<S, F = f64> {
    solution: S,
    objective: F,
    iterations: usize,
    evaluations: usize,
    status: Status,
}

impl<S, F: Copy> Solution<S, F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    ///
    /// # Arguments
    ///
    /// * `solution`: Value of the variables, in a solver specific representation.
    /// * `objective`: Objective function value, in the direction the caller asked for.
    /// * `iterations`: Main loop iterations of the solver (pivots for the Simplex method, nodes for
    /// branch and bound).
    /// * `evaluations`: Expensive inner operations (pivots, for both solvers).
    /// * `status`: What could be proven about the solution.
    #[must_use]
    pub fn new(solution: S, objective: F, iterations: usize, evaluations: usize, status: Status) -> Self {
        Self {
            solution,
            objective,
            iterations,
            evaluations,
            status,
        }
    }

    /// Value of the variables.
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Take ownership of the variable values.
    pub fn into_solution(self) -> S {
        self.solution
    }

    /// Objective function value.
    pub fn objective(&self) -> F {
        self.objective
    }

    /// Number of main loop iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of expensive inner operations.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// What could be proven about this solution.
    pub fn status(&self) -> Status {
        self.status
    }
}

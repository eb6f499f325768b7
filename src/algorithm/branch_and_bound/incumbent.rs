//! # The best integer solution found so far
use num_traits::Float;

use crate::data::linear_program::elements::Objective;

/// Best known solution that satisfies all integrality constraints.
///
/// Objective values are stored in the user's frame; comparisons happen in the minimization frame.
#[derive(Clone, Debug)]
pub struct Incumbent<F> {
    objective: Objective,
    best: Option<(Vec<F>, F)>,
}

impl<F: Float> Incumbent<F> {
    /// Start without a solution.
    #[must_use]
    pub fn new(objective: Objective) -> Self {
        Self { objective, best: None }
    }

    /// Whether a solution was installed.
    pub fn is_some(&self) -> bool {
        self.best.is_some()
    }

    /// Objective value of the incumbent, or the value reported for infeasible problems if there is
    /// none.
    pub fn objective_value(&self) -> F {
        self.best.as_ref()
            .map_or_else(|| self.objective.infeasible_value(), |&(_, value)| value)
    }

    /// The incumbent's objective value in the minimization frame, `inf` if there is none.
    fn minimized_value(&self) -> F {
        self.best.as_ref()
            .map_or_else(F::infinity, |&(_, value)| self.objective.sign::<F>() * value)
    }

    /// Whether a subproblem with this (minimization frame) bound can't contain a solution that is
    /// better than the incumbent by more than `eps`.
    pub fn dominates(&self, bound: F, eps: F) -> bool {
        self.is_some() && bound >= self.minimized_value() - eps
    }

    /// Replace the incumbent if the candidate is strictly better.
    ///
    /// # Arguments
    ///
    /// * `solution`: Values of all variables, integral where required.
    /// * `value`: Objective value in the user's frame.
    ///
    /// # Return value
    ///
    /// Whether the candidate was installed.
    pub fn try_install(&mut self, solution: Vec<F>, value: F) -> bool {
        if self.objective.sign::<F>() * value < self.minimized_value() {
            self.best = Some((solution, value));
            true
        } else {
            false
        }
    }

    /// The incumbent and its objective value.
    pub fn into_inner(self) -> Option<(Vec<F>, F)> {
        self.best
    }
}

//! # Phase two: optimizing
use log::debug;
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau to optimize, the objective row determines what is minimized.
/// * `eps`: Numerical tolerance.
/// * `max_iter`: Pivoting stops once the tableau has performed this many basis changes in total.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    eps: F,
    max_iter: usize,
) -> OptimizationResult
where
    F: Float,
    PR: PivotRule<F>,
{
    let mut rule = PR::new();
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau, eps));

        match rule.select_primal_pivot_column(tableau, eps) {
            Some(column_index) => {
                if tableau.nr_iterations() >= max_iter {
                    debug!("iteration limit of {max_iter} reached");
                    break OptimizationResult::MaxIter;
                }

                match tableau.select_primal_pivot_row(column_index, eps) {
                    Some(row_index) => tableau.bring_into_basis(column_index, row_index, eps),
                    None => break OptimizationResult::Unbounded,
                }
            },
            None => break OptimizationResult::FiniteOptimum,
        }
    }
}

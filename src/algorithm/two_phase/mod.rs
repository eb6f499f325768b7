//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two phase simplex
//! algorithm. A basic feasible solution is found first using artificial variables, if the slack
//! basis isn't feasible already. That solution is then optimized using the primal Simplex method
//! with Bland's pivoting rule.
use log::debug;
use num_traits::Float;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::phase_one::{FeasibilityResult, Rank};
use crate::algorithm::two_phase::strategy::pivot_rule::Bland;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::config::LpConfig;
use crate::data::linear_program::elements::{Objective, Status};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::validate::{check_finite, check_matrix_dims, check_tolerance, warn_large_coefficients, ValidationError};

pub mod matrix_provider;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

#[cfg(test)]
mod test;

/// Solve `min (or max) c x s.t. A x <= b, x >= 0`.
///
/// # Arguments
///
/// * `c`: Cost of each of the `n` variables.
/// * `a`: Constraint matrix with `m` rows of length `n`. All rows are read as `<=` constraints.
/// * `b`: Right hand side, one value per row of `a`.
/// * `config`: Direction of optimization, tolerance and pivot budget.
///
/// # Return value
///
/// A solution of length `n`. Its status is one of
/// * `Optimal`: the solution is a feasible, optimal vertex.
/// * `Infeasible`: no solution exists, the solution is all zeros.
/// * `Unbounded`: the objective is unbounded, the solution is the last vertex visited.
///
/// For infeasible and unbounded problems, the objective value is not read from the tableau. It is
/// `+inf` (minimizing) or `-inf` (maximizing) when infeasible, and `-inf` (minimizing) or `+inf`
/// (maximizing) when unbounded.
/// * `MaxIter`: the pivot budget ran out. If that happened in the second phase, the solution is
/// feasible but not necessarily optimal.
///
/// The input is assumed to be well formed, see `try_solve_lp` for a checked version.
pub fn solve_lp<F, R>(c: &[F], a: &[R], b: &[F], config: LpConfig<F>) -> Solution<Vec<F>, F>
where
    F: Float,
    R: AsRef<[F]>,
{
    MatrixData::new(c, a, b).solve_relaxation(config)
}

/// Check the input and then solve it with `solve_lp`.
///
/// # Errors
///
/// When the dimensions don't match, when the data contains values that are not finite or when the
/// tolerance is not positive.
pub fn try_solve_lp<F, R>(
    c: &[F],
    a: &[R],
    b: &[F],
    config: LpConfig<F>,
) -> Result<Solution<Vec<F>, F>, ValidationError>
where
    F: Float,
    R: AsRef<[F]>,
{
    check_matrix_dims(c, a, b)?;
    check_finite(c, a, b)?;
    check_tolerance("eps", config.eps)?;
    warn_large_coefficients(a);

    Ok(solve_lp(c, a, b, config))
}

impl<F, MP> SolveRelaxation<F> for MP
where
    F: Float,
    MP: MatrixProvider<F>,
{
    fn solve_relaxation(&self, config: LpConfig<F>) -> Solution<Vec<F>, F> {
        type PivotRule = Bland;

        let LpConfig { objective, eps, max_iter } = config;
        let mut tableau = Tableau::new(self, objective);

        if tableau.needs_artificial_basis(eps) {
            match phase_one::compute_bfs::<_, PivotRule>(&mut tableau, eps, max_iter) {
                FeasibilityResult::Feasible(Rank::Full) => {},
                FeasibilityResult::Feasible(Rank::Deficient(rows)) => {
                    debug!("{} rows with a basic artificial variable stay inert during phase two", rows.len());
                },
                FeasibilityResult::Infeasible => {
                    return without_solution(&tableau, objective, Status::Infeasible);
                },
                FeasibilityResult::MaxIter => {
                    return without_solution(&tableau, objective, Status::MaxIter);
                },
            }
        }

        let result = phase_two::primal::<_, PivotRule>(&mut tableau, eps, max_iter);
        debug!("simplex finished after {} pivots: {result:?}", tableau.nr_iterations());
        extract_solution(&tableau, objective, result)
    }
}

/// Read the solution and objective value from a tableau after the second phase.
fn extract_solution<F: Float>(
    tableau: &Tableau<F>,
    objective: Objective,
    result: OptimizationResult,
) -> Solution<Vec<F>, F> {
    let iterations = tableau.nr_iterations();
    let (value, status) = match result {
        OptimizationResult::FiniteOptimum => {
            (objective.sign::<F>() * tableau.objective_function_value(), Status::Optimal)
        },
        OptimizationResult::MaxIter => {
            (objective.sign::<F>() * tableau.objective_function_value(), Status::MaxIter)
        },
        OptimizationResult::Unbounded => (objective.unbounded_value(), Status::Unbounded),
    };

    Solution::new(tableau.current_bfs(), value, iterations, iterations, status)
}

/// Result for when no feasible solution is known.
fn without_solution<F: Float>(
    tableau: &Tableau<F>,
    objective: Objective,
    status: Status,
) -> Solution<Vec<F>, F> {
    let iterations = tableau.nr_iterations();
    let solution = vec![F::zero(); tableau.nr_variables()];

    Solution::new(solution, objective.infeasible_value(), iterations, iterations, status)
}

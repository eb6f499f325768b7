//! # Phase one: finding a basic feasible solution
use log::debug;
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_two;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;

/// Compute a basic feasible solution, if the all slack basis isn't one.
///
/// Every row with a negative constraint value is negated and gets an artificial variable as its
/// basic variable. The sum of the artificial variables is then minimized using the primal Simplex
/// method. If it can be reduced to zero, the artificial variables are removed and the original
/// objective is restored, expressed relative to the new basis.
///
/// # Arguments
///
/// * `tableau`: Tableau with all slacks in the basis, as created by `Tableau::new`.
/// * `eps`: Numerical tolerance.
/// * `max_iter`: Pivot budget, shared with the second phase.
///
/// # Return value
///
/// Whether the problem is feasible. If so, the tableau is left in a basic feasible solution state,
/// ready for the second phase.
pub(crate) fn compute_bfs<F, PR>(
    tableau: &mut Tableau<F>,
    eps: F,
    max_iter: usize,
) -> FeasibilityResult
where
    F: Float,
    PR: PivotRule<F>,
{
    let infeasible_rows = (0..tableau.nr_rows())
        .filter(|&i| tableau.constraint_value(i) < -eps)
        .collect::<Vec<_>>();
    if infeasible_rows.is_empty() {
        return FeasibilityResult::Feasible(Rank::Full);
    }

    for &row in &infeasible_rows {
        tableau.add_artificial(row);
    }
    debug!("phase one: {} artificial variables", infeasible_rows.len());

    let original_objective = tableau.set_artificial_objective_row();
    match phase_two::primal::<_, PR>(tableau, eps, max_iter) {
        OptimizationResult::FiniteOptimum => {},
        // The artificial cost is bounded from below by zero. A column can still look profitable
        // when its relative cost is the sum of entries that are each too small to pivot on.
        OptimizationResult::Unbounded => debug!("phase one: no pivot row for a profitable column"),
        OptimizationResult::MaxIter => return FeasibilityResult::MaxIter,
    }

    if tableau.objective_function_value() > eps {
        debug!(
            "phase one: artificial cost {:e} can't be reduced to zero",
            tableau.objective_function_value().to_f64().unwrap_or(f64::NAN),
        );
        return FeasibilityResult::Infeasible;
    }

    let rows_to_remove = remove_artificial_basis_variables(tableau, eps);
    tableau.remove_artificial_columns();
    tableau.restore_objective_row(original_objective, eps);

    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    };
    FeasibilityResult::Feasible(rank)
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// The problem is feasible and the tableau is in a basic feasible solution state.
    Feasible(Rank),
    /// The problem is not feasible.
    Infeasible,
    /// The pivot budget ran out before feasibility could be decided.
    MaxIter,
}

/// Whether every artificial variable could be driven out of the basis.
///
/// Each row has its own slack column, so the rows are always independent in exact arithmetic.
/// An artificial variable can only get stuck in the basis when all entries of its row are within
/// the tolerance of zero; those rows are reported as deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// All artificial variables left the basis.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for, with zero artificial cost.
/// * `eps`: Entries not larger than this in absolute value are considered zero.
///
/// # Return value
///
/// A `Vec` with indices of rows whose artificial variable couldn't leave the basis, because all
/// active coefficients in the row are within `eps` of zero. Is sorted as a side effect of the
/// algorithm. Such a row is never selected as a pivot row again.
fn remove_artificial_basis_variables<F: Float>(tableau: &mut Tableau<F>, eps: F) -> Vec<usize> {
    let first_artificial = tableau.nr_columns() - tableau.nr_artificial_variables();
    let mut rows_to_remove = Vec::new();

    for row in 0..tableau.nr_rows() {
        if !tableau.is_artificial(tableau.basis_column_index_for_row(row)) {
            continue;
        }

        let pivot_column = (0..first_artificial)
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| tableau.entry(row, j).abs() > eps);

        match pivot_column {
            Some(column) => tableau.bring_into_basis(column, row, eps),
            None => rows_to_remove.push(row),
        }
    }

    if !rows_to_remove.is_empty() {
        debug!("phase one: rows {rows_to_remove:?} are zero within the tolerance");
    }
    rows_to_remove
}

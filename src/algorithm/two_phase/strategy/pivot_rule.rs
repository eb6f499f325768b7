//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use num_traits::Float;

use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is currently made
/// independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible solution state.
    /// * `eps`: Relative costs need to be below `-eps` to be considered profitable.
    ///
    /// # Return value
    ///
    /// Index of a non basic column with negative relative cost, or `None` if the current basis is
    /// optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, eps: F) -> Option<usize>;
}

/// Bland's rule: pivot on the first column which has a negative relative cost.
///
/// Combined with choosing the leaving variable with the lowest index among the rows attaining the
/// minimum ratio, this rule can't cycle.
pub struct Bland;

impl<F: Float> PivotRule<F> for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, eps: F) -> Option<usize> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column) < -eps)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
    use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::elements::Objective;

    #[test]
    fn lowest_profitable_index() {
        let cost = [1f64, -1f64, -5f64];
        let constraints = [[1f64, 1f64, 1f64]];
        let b = [1f64];
        let tableau = Tableau::new(&MatrixData::new(&cost, &constraints, &b), Objective::Minimize);

        let mut rule = <Bland as PivotRule<f64>>::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau, 1e-10), Some(1));
    }

    #[test]
    fn optimal() {
        let cost = [1f64, 0f64];
        let constraints = [[1f64, 1f64]];
        let b = [1f64];
        let tableau = Tableau::new(&MatrixData::new(&cost, &constraints, &b), Objective::Minimize);

        let mut rule = <Bland as PivotRule<f64>>::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau, 1e-10), None);
    }
}

//! # Relaxations of bounded subproblems
//!
//! Each node of the search tree tightens the bounds of some variables. The relaxation of a node is
//! the original problem with those bounds added as extra rows, solved from scratch.
use std::iter::once;

use enum_map::{enum_map, EnumMap};
use itertools::Either;
use num_traits::Float;

use crate::algorithm::SolveRelaxation;
use crate::algorithm::two_phase::matrix_provider::{MatrixProvider, SparseTuple};
use crate::data::linear_program::config::LpConfig;
use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::solution::Solution;

/// A problem extended with virtual variable bound rows.
///
/// The rows of the underlying problem come first, followed by the lower bound rows and then the
/// upper bound rows, each group in order of increasing variable index:
///
/// /                 || Vars of which we want a solution |------
/// ==================||==================================||  b  |
/// Problem rows      ||         underlying problem       ||     |
/// ------------------||----------------------------------||-----|
/// Lower bound rows  ||   -1 (one value per row)         || -l  |
/// ------------------||----------------------------------||-----|
/// Upper bound rows  ||   +1 (one value per row)         ||  u  |
/// --------------------------------------------------------------
#[derive(Debug)]
pub struct BoundedMatrix<'a, F, MP> {
    /// Problem without the bounds of this node.
    base: &'a MP,
    /// Variable index and bound value, for each bound row.
    bounds: Vec<SparseTuple<F>>,
    /// Bound index (relative to the first bound row) at which each group of bounds ends.
    row_group_end: EnumMap<BoundDirection, usize>,
}

impl<'a, F, MP> BoundedMatrix<'a, F, MP>
where
    F: Float,
    MP: MatrixProvider<F>,
{
    /// Create a new `BoundedMatrix` instance.
    ///
    /// # Arguments
    ///
    /// * `base`: Problem to add bounds to.
    /// * `lower`: Lower bound for each variable. Only bounds larger than `eps` get a row, as the
    /// variables are nonnegative already.
    /// * `upper`: Upper bound for each variable. Only finite bounds get a row.
    /// * `eps`: Numerical tolerance.
    #[must_use]
    pub fn new(base: &'a MP, lower: &[F], upper: &[F], eps: F) -> Self {
        debug_assert_eq!(lower.len(), base.nr_columns());
        debug_assert_eq!(upper.len(), base.nr_columns());

        let mut bounds = lower.iter().copied()
            .enumerate()
            .filter(|&(_, value)| value > eps)
            .collect::<Vec<_>>();
        let nr_lower = bounds.len();
        bounds.extend(upper.iter().copied()
            .enumerate()
            .filter(|&(_, value)| value.is_finite())
        );

        let row_group_end = enum_map! {
            BoundDirection::Lower => nr_lower,
            BoundDirection::Upper => bounds.len(),
        };

        Self { base, bounds, row_group_end }
    }

    /// Whether a bound row represents a lower or an upper bound.
    ///
    /// # Arguments
    ///
    /// * `bound_index`: Index relative to the first bound row.
    fn bound_direction(&self, bound_index: usize) -> BoundDirection {
        debug_assert!(bound_index < self.row_group_end[BoundDirection::Upper]);

        if bound_index < self.row_group_end[BoundDirection::Lower] {
            BoundDirection::Lower
        } else {
            BoundDirection::Upper
        }
    }
}

impl<F, MP> MatrixProvider<F> for BoundedMatrix<'_, F, MP>
where
    F: Float,
    MP: MatrixProvider<F>,
{
    fn row(&self, i: usize) -> impl Iterator<Item = SparseTuple<F>> + '_ {
        debug_assert!(i < self.nr_rows());

        if i < self.nr_constraints() {
            Either::Left(self.base.row(i))
        } else {
            let bound_index = i - self.nr_constraints();
            let (variable, _) = self.bounds[bound_index];
            let coefficient = self.bound_direction(bound_index).into::<F>();
            Either::Right(once((variable, coefficient)))
        }
    }

    fn cost_value(&self, j: usize) -> F {
        self.base.cost_value(j)
    }

    fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        if i < self.nr_constraints() {
            self.base.constraint_value(i)
        } else {
            let bound_index = i - self.nr_constraints();
            let (_, value) = self.bounds[bound_index];
            self.bound_direction(bound_index).into::<F>() * value
        }
    }

    fn nr_constraints(&self) -> usize {
        self.base.nr_rows()
    }

    fn nr_bounds(&self) -> usize {
        self.bounds.len()
    }

    fn nr_columns(&self) -> usize {
        self.base.nr_columns()
    }
}

/// Solve the relaxation of a problem within a box.
///
/// The relaxation is built and solved from scratch, no information of a parent node is reused.
pub fn solve_bounded<F, MP>(
    problem: &MP,
    lower: &[F],
    upper: &[F],
    config: LpConfig<F>,
) -> Solution<Vec<F>, F>
where
    F: Float,
    MP: MatrixProvider<F>,
{
    BoundedMatrix::new(problem, lower, upper, config.eps).solve_relaxation(config)
}

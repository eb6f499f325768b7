//! # Simple matrix data
//!
//! A borrowed view of a cost vector, a dense constraint matrix and a right hand side.
use crate::algorithm::two_phase::matrix_provider::{MatrixProvider, SparseTuple};

/// Describes a linear program `min c x s.t. A x <= b, x >= 0` by referencing the caller's data.
///
/// The rows of `A` can be anything that dereferences to a slice, such as `Vec<F>` or `[F; N]`.
#[derive(Debug, PartialEq)]
pub struct MatrixData<'a, F, R> {
    /// Cost vector, one value per column.
    cost: &'a [F],
    /// Coefficient matrix, one slice of length `cost.len()` per row.
    constraints: &'a [R],
    /// Constraint values, one per row of `constraints`.
    b: &'a [F],
}

impl<'a, F, R: AsRef<[F]>> MatrixData<'a, F, R> {
    /// Create a new `MatrixData` instance.
    ///
    /// A plain constructor. Dimensions are only checked in debug builds.
    #[must_use]
    pub fn new(cost: &'a [F], constraints: &'a [R], b: &'a [F]) -> Self {
        debug_assert_eq!(constraints.len(), b.len());
        debug_assert!(constraints.iter().all(|row| row.as_ref().len() == cost.len()));

        Self { cost, constraints, b }
    }
}

impl<F: Copy, R: AsRef<[F]>> MatrixProvider<F> for MatrixData<'_, F, R> {
    fn row(&self, i: usize) -> impl Iterator<Item = SparseTuple<F>> + '_ {
        debug_assert!(i < self.nr_rows());

        self.constraints[i].as_ref().iter().copied().enumerate()
    }

    fn cost_value(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.cost[j]
    }

    fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.b[i]
    }

    fn nr_constraints(&self) -> usize {
        self.b.len()
    }

    fn nr_bounds(&self) -> usize {
        0
    }

    fn nr_columns(&self) -> usize {
        self.cost.len()
    }
}

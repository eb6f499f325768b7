//! # Representing linear programs for rapid read access
//!
//! The Simplex method works on a tableau that is built once from the problem data. This module
//! contains the read-only views of a problem that a tableau can be built from. Nothing in these
//! views determines a basis.
pub mod matrix_data;

/// A column index together with a value.
pub type SparseTuple<F> = (usize, F);

/// Abstract interface for a constraint matrix, cost vector and constraint vector.
///
/// All rows are read as `<=` constraints and all variables are nonnegative. The indexing for the
/// variables and constraints is as follows:
///
/// /                 || Vars of which we want a solution |-----
/// ==================||==================================|| b |
/// Constraints       ||            constants             ||   |
/// ------------------||----------------------------------||---|
/// Bound constraints ||     +/- 1 (one value per row)    ||   |
/// ---------------------------------------------------------
///
/// Implementors don't need to store the matrix explicitly; bound rows in particular are virtual.
pub trait MatrixProvider<F> {
    /// Nonzero (or explicitly stored) coefficients of a row.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index, in range `0` until `self.nr_rows()`.
    ///
    /// # Return value
    ///
    /// Tuples of column index and coefficient, with column indices in range `0` until
    /// `self.nr_columns()`.
    fn row(&self, i: usize) -> impl Iterator<Item = SparseTuple<F>> + '_;

    /// Cost of a variable.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    fn cost_value(&self, j: usize) -> F;

    /// Right hand side of a row, often called `b` in mathematical notation.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index, either a constraint or a bound.
    fn constraint_value(&self, i: usize) -> F;

    /// The number of constraints in the problem. This excludes simple variable bounds.
    fn nr_constraints(&self) -> usize;

    /// The number of simple variable bounds in the problem. This excludes more complicated
    /// constraints.
    fn nr_bounds(&self) -> usize;

    /// The total number of rows in the provided virtual matrix.
    fn nr_rows(&self) -> usize {
        self.nr_constraints() + self.nr_bounds()
    }

    /// The number of variables. Slack and artificial variables are added by the tableau.
    fn nr_columns(&self) -> usize;
}

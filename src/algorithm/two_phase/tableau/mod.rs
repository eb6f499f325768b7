//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is dense and extended with supplementary data structures for efficiency.
use std::collections::HashSet;
use std::fmt::{Debug, Display, Formatter, Result as FormatResult};
use std::iter::once;

use log::trace;
use num_traits::Float;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::data::linear_program::elements::Objective;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a dense copy of the problem, with all elementary row operations applied to it. The
/// column layout is
///
/// /            || Vars of which we want a solution | Slack vars | Artificial vars ||     |
/// =============||==================================|============|=================||=====|
/// Constraints  ||                                  |     I      |                 ||  b  |
/// -------------||----------------------------------|------------|-----------------||-----|
/// Objective    ||               c                  |     0      |        0        || -z  |
///
/// Room for one artificial variable per row is allocated up front, such that the first phase
/// doesn't need to reallocate. Only the first `self.nr_columns()` columns are active; the right
/// hand side is always stored in the last column.
#[derive(Clone, PartialEq)]
pub struct Tableau<F> {
    /// Row major storage of `m + 1` rows of `self.width` values, the objective row last.
    data: Vec<F>,
    /// Allocated row length: `n + m + m + 1`.
    width: usize,

    /// Number of constraint rows, `m`.
    nr_rows: usize,
    /// Number of variables of which we want a solution, `n`.
    nr_variables: usize,
    /// Number of artificial columns that are currently active.
    nr_artificial_variables: usize,

    /// Column currently in the basis, for each row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// Copy of the pivot row, reused between pivots.
    scratch: Vec<F>,
    /// Number of basis changes performed.
    nr_iterations: usize,
}

impl<F: Float> Tableau<F> {
    /// Create the initial tableau, with all slack variables in the basis.
    ///
    /// # Arguments
    ///
    /// * `provider`: Problem to build the tableau for.
    /// * `objective`: Direction of optimization. When maximizing, the costs are negated, as the
    /// Simplex method always minimizes.
    pub fn new<MP: MatrixProvider<F>>(provider: &MP, objective: Objective) -> Self {
        let nr_rows = provider.nr_rows();
        let nr_variables = provider.nr_columns();
        let width = nr_variables + 2 * nr_rows + 1;

        let mut data = vec![F::zero(); (nr_rows + 1) * width];
        for i in 0..nr_rows {
            let row = &mut data[i * width..(i + 1) * width];
            for (j, value) in provider.row(i) {
                debug_assert!(j < nr_variables);
                row[j] = value;
            }
            row[nr_variables + i] = F::one();
            row[width - 1] = provider.constraint_value(i);
        }
        let sign = objective.sign::<F>();
        let objective_row = &mut data[nr_rows * width..];
        for (j, value) in objective_row.iter_mut().take(nr_variables).enumerate() {
            *value = sign * provider.cost_value(j);
        }

        let basis_indices = (nr_variables..nr_variables + nr_rows).collect::<Vec<_>>();
        let basis_columns = basis_indices.iter().copied().collect();

        Self {
            data,
            width,
            nr_rows,
            nr_variables,
            nr_artificial_variables: 0,
            basis_indices,
            basis_columns,
            scratch: vec![F::zero(); width],
            nr_iterations: 0,
        }
    }

    /// Pivot on an element of the tableau.
    ///
    /// Scales the pivot row such that the pivot element becomes one, and then eliminates the pivot
    /// column from every other row, including the objective row. Rows with a value smaller than
    /// `eps` in the pivot column are not updated; their value in that column is set to zero.
    ///
    /// This method does not update the basis, see `bring_into_basis` for that.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Row index, in range `0` until `self.nr_rows()`.
    /// * `pivot_column`: Column index, in range `0` until `self.nr_columns()`.
    /// * `eps`: Values below this magnitude are treated as zero.
    pub fn pivot(&mut self, pivot_row: usize, pivot_column: usize, eps: F) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(self.entry(pivot_row, pivot_column).abs() > F::zero());

        let width = self.width;
        let nr_columns = self.nr_columns();

        let inverse = self.entry(pivot_row, pivot_column).recip();
        {
            let row = &mut self.data[pivot_row * width..(pivot_row + 1) * width];
            for j in (0..nr_columns).chain(once(width - 1)) {
                row[j] = row[j] * inverse;
            }
            row[pivot_column] = F::one();
            self.scratch.copy_from_slice(row);
        }

        for i in (0..=self.nr_rows).filter(|&i| i != pivot_row) {
            let row = &mut self.data[i * width..(i + 1) * width];
            let factor = row[pivot_column];
            if factor.abs() < eps {
                row[pivot_column] = F::zero();
                continue;
            }

            for j in (0..nr_columns).chain(once(width - 1)) {
                row[j] = row[j] - factor * self.scratch[j];
            }
            row[pivot_column] = F::zero();
        }
    }

    /// Brings a column into the basis by pivoting on it and updating the data structures holding
    /// the collection of basis columns.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Column index of the entering variable, not yet in the basis.
    /// * `pivot_row`: Row index; the variable that is basic in this row leaves the basis.
    /// * `eps`: Tolerance used while pivoting.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize, eps: F) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column));

        trace!(
            "pivot {}: column {} enters, column {} leaves at row {}",
            self.nr_iterations, pivot_column, self.basis_indices[pivot_row], pivot_row,
        );

        self.pivot(pivot_row, pivot_column, eps);
        self.update_basis_indices(pivot_row, pivot_column);
        self.nr_iterations += 1;
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_indices[pivot_row] = pivot_column;

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint vector and the column.
    ///
    /// When there are multiple choices for the pivot row, Bland's anti cycling algorithm is used
    /// to avoid cycles: the row whose basic variable has the lowest index is chosen.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    /// * `eps`: Entries of the column that are not larger than this are not considered, and ratios
    /// that differ by no more than this are considered equal.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// the column.
    pub fn select_primal_pivot_row(&self, column: usize, eps: F) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.entry(row, column);
            if xij <= eps {
                continue;
            }

            let ratio = self.constraint_value(row) / xij;
            match &mut min_values {
                Some((min_index, min_ratio)) => {
                    if ratio < *min_ratio - eps {
                        *min_index = row;
                        *min_ratio = ratio;
                    } else if (ratio - *min_ratio).abs() <= eps
                        && self.basis_indices[row] < self.basis_indices[*min_index] {
                        // Bland's anti cycling algorithm
                        *min_index = row;
                    }
                },
                None => min_values = Some((row, ratio)),
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Value of an element of the tableau.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index, in range `0` until `self.nr_rows()`.
    /// * `j`: Column index, in range `0` until `self.nr_columns()`.
    pub fn entry(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.data[i * self.width + j]
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to calculate the relative cost for, in range `0` through
    /// `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// The relative cost; negative values indicate a direction of improvement.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.data[self.nr_rows * self.width + j]
    }

    /// Current value of the basic variable of a row.
    pub fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.data[i * self.width + self.width - 1]
    }

    /// Get the cost of the current solution.
    ///
    /// # Return value
    ///
    /// The current value of the objective function, as a minimization. That is, the costs are
    /// negated if the problem maximizes.
    ///
    /// # Note
    ///
    /// This function works for both the artificial and the original objective.
    pub fn objective_function_value(&self) -> F {
        -self.data[(self.nr_rows + 1) * self.width - 1]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis_columns.contains(&column)
    }

    /// Column of the variable that is basic in a row.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());

        self.basis_indices[i]
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// Value of each of the variables of which we want a solution; slack and artificial values are
    /// omitted.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_variables];
        for (i, &column) in self.basis_indices.iter().enumerate() {
            if column < self.nr_variables {
                solution[column] = self.constraint_value(i);
            }
        }

        solution
    }

    /// Whether the all slack basis is infeasible, because some constraint values are negative.
    pub fn needs_artificial_basis(&self, eps: F) -> bool {
        (0..self.nr_rows()).any(|i| self.constraint_value(i) < -eps)
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of active columns, excluding the right hand side.
    pub fn nr_columns(&self) -> usize {
        self.nr_variables + self.nr_rows + self.nr_artificial_variables
    }

    /// Number of variables of which we want a solution.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of active artificial variables.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Number of basis changes performed since creation.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }

    /// Whether a column index refers to an artificial variable.
    pub fn is_artificial(&self, column: usize) -> bool {
        column >= self.nr_variables + self.nr_rows
    }
}

/// Operations used by the first phase to set up and tear down the artificial basis.
impl<F: Float> Tableau<F> {
    /// Replace the basic variable of a row by a new artificial variable.
    ///
    /// The row is negated first, such that its constraint value becomes nonnegative.
    ///
    /// # Return value
    ///
    /// The column index of the new artificial variable.
    pub(crate) fn add_artificial(&mut self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());
        debug_assert!(self.nr_artificial_variables < self.nr_rows);

        let width = self.width;
        let nr_columns = self.nr_columns();
        let row = &mut self.data[i * width..(i + 1) * width];
        for j in (0..nr_columns).chain(once(width - 1)) {
            row[j] = -row[j];
        }

        let artificial = nr_columns;
        row[artificial] = F::one();
        self.nr_artificial_variables += 1;
        self.update_basis_indices(i, artificial);

        artificial
    }

    /// Replace the objective row by the artificial cost: the sum of all artificial variables.
    ///
    /// The new objective row is expressed relative to the current basis, such that the artificial
    /// (basic) columns have zero relative cost.
    ///
    /// # Return value
    ///
    /// The previous objective row, to be restored with `restore_objective_row`.
    pub(crate) fn set_artificial_objective_row(&mut self) -> Vec<F> {
        let width = self.width;
        let objective_start = self.nr_rows * width;
        let original = self.data[objective_start..].to_vec();

        for value in &mut self.data[objective_start..] {
            *value = F::zero();
        }
        let first_artificial = self.nr_variables + self.nr_rows;
        for j in first_artificial..self.nr_columns() {
            self.data[objective_start + j] = F::one();
        }

        for i in 0..self.nr_rows {
            if self.is_artificial(self.basis_indices[i]) {
                for j in (0..self.nr_columns()).chain(once(width - 1)) {
                    let value = self.data[i * width + j];
                    self.data[objective_start + j] = self.data[objective_start + j] - value;
                }
            }
        }

        original
    }

    /// Make all artificial columns inactive.
    ///
    /// Artificial variables that are still basic stay in the basis; all active coefficients of
    /// their rows should be zero within the tolerance.
    pub(crate) fn remove_artificial_columns(&mut self) {
        self.nr_artificial_variables = 0;
    }

    /// Restore an objective row, and express it relative to the current basis.
    ///
    /// # Arguments
    ///
    /// * `objective_row`: Row as returned by `set_artificial_objective_row`.
    /// * `eps`: Relative costs of basic variables smaller than this are not eliminated.
    pub(crate) fn restore_objective_row(&mut self, objective_row: Vec<F>, eps: F) {
        debug_assert_eq!(objective_row.len(), self.width);

        let width = self.width;
        let objective_start = self.nr_rows * width;
        self.data[objective_start..].copy_from_slice(&objective_row);

        for i in 0..self.nr_rows {
            let column = self.basis_indices[i];
            if column >= self.nr_columns() {
                continue;
            }

            let cost = self.data[objective_start + column];
            if cost.abs() > eps {
                for j in (0..self.nr_columns()).chain(once(width - 1)) {
                    let value = self.data[i * width + j];
                    self.data[objective_start + j] = self.data[objective_start + j] - cost * value;
                }
            }
        }
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: Float>(tableau: &Tableau<F>, eps: F) -> bool {
    // Correct number of basis columns (uniqueness is implied because it's a set)
    let basis_size = tableau.basis_columns.len() == tableau.nr_rows();

    // Active basis columns form an identity submatrix
    let tolerance = eps.sqrt().max(eps);
    let identity = (0..tableau.nr_rows())
        .map(|i| (i, tableau.basis_column_index_for_row(i)))
        .filter(|&(_, j)| j < tableau.nr_columns())
        .all(|(i, j)| (0..tableau.nr_rows()).all(|k| {
            let expected = if k == i { F::one() } else { F::zero() };
            (tableau.entry(k, j) - expected).abs() <= tolerance
        }));

    // `b` >= 0
    let feasible = (0..tableau.nr_rows()).all(|i| tableau.constraint_value(i) >= -tolerance);

    basis_size && identity && feasible
}

impl<F: Float + Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Tableau ({} rows, {} columns, {} artificial):", self.nr_rows, self.nr_columns(), self.nr_artificial_variables)?;

        write!(f, "{:>6} |", "basis")?;
        for j in 0..self.nr_columns() {
            write!(f, " {j:>8}")?;
        }
        writeln!(f, " | {:>8}", "rhs")?;

        for i in 0..self.nr_rows {
            write!(f, "{:>6} |", self.basis_indices[i])?;
            for j in 0..self.nr_columns() {
                write!(f, " {:>8.3}", self.entry(i, j))?;
            }
            writeln!(f, " | {:>8.3}", self.constraint_value(i))?;
        }

        write!(f, "{:>6} |", "cost")?;
        for j in 0..self.nr_columns() {
            write!(f, " {:>8.3}", self.relative_cost(j))?;
        }
        writeln!(f, " | {:>8.3}", -self.objective_function_value())
    }
}

impl<F: Float + Debug> Debug for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.debug_struct("Tableau")
            .field("nr_rows", &self.nr_rows)
            .field("nr_variables", &self.nr_variables)
            .field("nr_artificial_variables", &self.nr_artificial_variables)
            .field("basis_indices", &self.basis_indices)
            .field("nr_iterations", &self.nr_iterations)
            .finish()
    }
}

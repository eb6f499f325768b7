//! # Input validation
//!
//! The solvers assume well formed input and only check shapes with debug assertions. These helpers
//! are for callers that want to check their data before solving; `try_solve_lp` and
//! `try_solve_milp` use them.
use log::warn;
use num_traits::Float;
use thiserror::Error;

use crate::data::number_types::float::constant;

/// Coefficients larger than this in absolute value are likely to cause numerical trouble.
pub const LARGE_COEFFICIENT: f64 = 1e6;

/// Describes why a problem can't be handed to a solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A vector or matrix row has the wrong length.
    #[error("{what} has length {got}, expected {expected}")]
    DimensionMismatch {
        /// Which part of the input.
        what: String,
        /// Length implied by the rest of the input.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// An integer variable index doesn't refer to a variable.
    #[error("integer variable index {index} is out of range for {nr_variables} variables")]
    IntegerIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of variables in the problem.
        nr_variables: usize,
    },
    /// A tolerance is not a positive, finite number.
    #[error("tolerance `{name}` must be positive and finite")]
    InvalidTolerance {
        /// Name of the setting.
        name: &'static str,
    },
    /// Problem data contains an infinite value or a NaN.
    #[error("{what} contains a value that is not finite")]
    NonFinite {
        /// Which part of the input.
        what: String,
    },
}

/// Check that `A` is `m x n` when `c` has length `n` and `b` has length `m`.
pub fn check_matrix_dims<F, R: AsRef<[F]>>(c: &[F], a: &[R], b: &[F]) -> Result<(), ValidationError> {
    if a.len() != b.len() {
        return Err(ValidationError::DimensionMismatch {
            what: "constraint matrix".to_string(),
            expected: b.len(),
            got: a.len(),
        });
    }

    match a.iter().position(|row| row.as_ref().len() != c.len()) {
        Some(i) => Err(ValidationError::DimensionMismatch {
            what: format!("constraint row {i}"),
            expected: c.len(),
            got: a[i].as_ref().len(),
        }),
        None => Ok(()),
    }
}

/// Check that no coefficient, cost or right hand side value is infinite or NaN.
pub fn check_finite<F: Float, R: AsRef<[F]>>(c: &[F], a: &[R], b: &[F]) -> Result<(), ValidationError> {
    let non_finite = |what: String| Err(ValidationError::NonFinite { what });

    if !c.iter().all(|v| v.is_finite()) {
        return non_finite("cost vector".to_string());
    }
    if let Some(i) = a.iter().position(|row| !row.as_ref().iter().all(|v| v.is_finite())) {
        return non_finite(format!("constraint row {i}"));
    }
    if !b.iter().all(|v| v.is_finite()) {
        return non_finite("right hand side".to_string());
    }

    Ok(())
}

/// Check that all integer variable indices refer to a variable.
///
/// Duplicates are allowed; they are treated as a single index.
pub fn check_integers_valid(integers: &[usize], nr_variables: usize) -> Result<(), ValidationError> {
    match integers.iter().find(|&&index| index >= nr_variables) {
        Some(&index) => Err(ValidationError::IntegerIndexOutOfRange { index, nr_variables }),
        None => Ok(()),
    }
}

/// Check that a tolerance is positive and finite.
pub fn check_tolerance<F: Float>(name: &'static str, value: F) -> Result<(), ValidationError> {
    if value.is_finite() && value > F::zero() {
        Ok(())
    } else {
        Err(ValidationError::InvalidTolerance { name })
    }
}

/// Log a warning when the constraint matrix has coefficients of very large magnitude.
///
/// # Return value
///
/// Whether a warning was emitted.
pub fn warn_large_coefficients<F: Float, R: AsRef<[F]>>(a: &[R]) -> bool {
    let threshold = constant::<F>(LARGE_COEFFICIENT);
    let largest = a.iter()
        .flat_map(|row| row.as_ref().iter())
        .map(|v| v.abs())
        .fold(F::zero(), F::max);

    if largest > threshold {
        warn!(
            "constraint matrix has coefficients up to {:e} in magnitude, results may be inaccurate",
            largest.to_f64().unwrap_or(f64::INFINITY),
        );
        true
    } else {
        false
    }
}

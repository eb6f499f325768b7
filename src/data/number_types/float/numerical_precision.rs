//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

use crate::data::number_types::float::constant;

/// Below this magnitude, an objective value is considered zero when computing a gap.
const GAP_ZERO_THRESHOLD: f64 = 1e-10;

/// Distance of a value to the nearest integer, in `[0, 0.5]`.
pub fn fractionality<F: Float>(value: F) -> F {
    (value - value.round()).abs()
}

/// Whether a value is within `epsilon` of an integer.
pub fn is_integral<F: Float>(value: F, epsilon: F) -> bool {
    fractionality(value) <= epsilon
}

/// Gap between an objective value and a bound.
///
/// Relative to the objective value, unless that value is (close to) zero, in which case the
/// absolute difference is returned.
pub fn gap<F: Float>(objective: F, bound: F) -> F {
    let difference = (objective - bound).abs();
    if objective.abs() < constant(GAP_ZERO_THRESHOLD) {
        difference
    } else {
        difference / objective.abs()
    }
}

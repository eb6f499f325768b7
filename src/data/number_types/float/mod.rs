//! # Floating point helpers
use num_traits::{Float, NumCast};

pub mod numerical_precision;

/// Convert an `f64` literal into the float type the solver works with.
///
/// Every `Float` can represent an `f64` approximately, so the conversion only fails for exotic
/// implementations; those get the machine epsilon, which keeps tolerances positive.
pub fn constant<F: Float>(value: f64) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::epsilon)
}

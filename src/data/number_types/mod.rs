//! # Number types
//!
//! The solvers are defined over any floating point type implementing `num_traits::Float`. This
//! module contains the helpers that deal with the finite precision of those types.
pub mod float;

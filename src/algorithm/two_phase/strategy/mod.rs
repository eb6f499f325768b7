//! # Strategies
//!
//! Choices that can be made while running the Simplex method, without affecting correctness.
pub mod pivot_rule;

//! # A linear and mixed integer program solver
//!
//! Linear programs are solved using the two phase Simplex Method with Bland's pivoting rule on a
//! dense tableau, as described in the book Combinatorial Optimization by Christos H. Papadimitriou
//! and Kenneth Steiglitz. Mixed integer programs are solved with best first branch and bound,
//! solving a linear relaxation at every node of the search tree.
//!
//! All problems are of the form `min (or max) c x s.t. A x <= b, x >= 0`.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

pub use crate::algorithm::branch_and_bound::{solve_milp, solve_milp_with_statistics, try_solve_milp};
pub use crate::algorithm::two_phase::{solve_lp, try_solve_lp};
pub use crate::data::linear_program::config::{LpConfig, MilpConfig};
pub use crate::data::linear_program::elements::{Objective, Status};
pub use crate::data::linear_program::solution::Solution;
pub use crate::data::linear_program::validate::ValidationError;

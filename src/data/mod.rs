//! # Problem and result data
//!
//! This module provides the data structures shared by the algorithms. Algorithms may introduce
//! their specific data structures in `algorithm::my_algorithm`.
pub mod linear_program;
pub mod number_types;

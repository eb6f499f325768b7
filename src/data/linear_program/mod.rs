//! # Representing linear programs
//!
//! Building blocks shared by the solvers: the outcome record, the status enum, the configuration
//! structs and helpers to validate input.
pub mod config;
pub mod elements;
pub mod solution;
pub mod validate;

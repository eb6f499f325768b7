//! # Building blocks to describe linear programs and their outcomes.
use std::fmt;
use std::ops::Neg;

use enum_map::Enum;
use num_traits::{Float, One};

/// Outcome of a solver call.
///
/// Shared by every solver in this crate, so that results of different algorithms can be compared
/// at the boundary. Infeasibility, unboundedness and budget exhaustion are outcomes, not errors.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// A solution was found and proven optimal.
    Optimal,
    /// A solution was found, but its optimality was not proven.
    ///
    /// Branch and bound reports this when the node budget runs out while an incumbent exists.
    Feasible,
    /// There is no solution.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// The iteration budget ran out before anything could be proven.
    MaxIter,
}

impl Status {
    /// Whether the accompanying solution can be used, even if it isn't certified optimal.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Optimal | Status::Feasible)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "OPTIMAL",
            Status::Feasible => "FEASIBLE",
            Status::Infeasible => "INFEASIBLE",
            Status::Unbounded => "UNBOUNDED",
            Status::MaxIter => "MAX_ITER",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Factor that turns this objective into a minimization.
    ///
    /// The Simplex method always minimizes; maximizing `c x` is minimizing `-c x`.
    #[must_use]
    pub fn sign<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Minimize => F::one(),
            Objective::Maximize => -F::one(),
        }
    }

    /// Objective value reported when no feasible solution exists.
    #[must_use]
    pub fn infeasible_value<F: Float>(self) -> F {
        match self {
            Objective::Minimize => F::infinity(),
            Objective::Maximize => F::neg_infinity(),
        }
    }

    /// Objective value reported when the objective can be improved without limit.
    #[must_use]
    pub fn unbounded_value<F: Float>(self) -> F {
        match self {
            Objective::Minimize => F::neg_infinity(),
            Objective::Maximize => F::infinity(),
        }
    }
}

impl From<bool> for Objective {
    /// Interpret a `minimize` flag.
    fn from(minimize: bool) -> Self {
        if minimize { Objective::Minimize } else { Objective::Maximize }
    }
}

/// Direction of a bound.
///
/// Branching only ever tightens bounds, and each tightened bound becomes a row of the relaxation.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b >= 0.
    Lower,
    /// In the case of a variable, 0 <= x <= b.
    Upper,
}

impl BoundDirection {
    /// Coefficient of the variable in the `<=` row representing this bound.
    ///
    /// A lower bound `x >= b` is written as `-x <= -b`.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            BoundDirection::Lower => -F::one(),
            BoundDirection::Upper => F::one(),
        }
    }
}

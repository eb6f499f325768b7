//! # Branch and bound
//!
//! Mixed integer linear programs are solved by exploring a tree of linear relaxations. Each node
//! tightens the bounds of some integer variables; its relaxation is solved with the two phase
//! Simplex method. The open node with the best bound is explored first.
use itertools::Itertools;
use log::{debug, info};
use num_traits::Float;

use crate::algorithm::branch_and_bound::incumbent::Incumbent;
use crate::algorithm::branch_and_bound::node::{Node, NodeQueue};
use crate::algorithm::branch_and_bound::relaxation::solve_bounded;
use crate::algorithm::branch_and_bound::statistics::{NodeOutcome, SearchStatistics};
use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
use crate::data::linear_program::config::MilpConfig;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::validate::{check_finite, check_integers_valid, check_matrix_dims, check_tolerance, warn_large_coefficients, ValidationError};
use crate::data::number_types::float::numerical_precision::{fractionality, gap, is_integral};

pub mod incumbent;
pub mod node;
pub mod relaxation;
pub mod statistics;


/// Solve `min (or max) c x s.t. A x <= b, x >= 0, x_j integral for j in integers`.
///
/// # Arguments
///
/// * `c`: Cost of each of the `n` variables.
/// * `a`: Constraint matrix with `m` rows of length `n`. All rows are read as `<=` constraints.
/// * `b`: Right hand side, one value per row of `a`.
/// * `integers`: Indices of the variables that should take integral values. Duplicates are
/// ignored.
/// * `config`: Direction of optimization, tolerances and budgets.
///
/// # Return value
///
/// The `iterations` of the solution count the explored nodes, the `evaluations` count the pivots
/// over all relaxations. Its status is one of
/// * `Optimal`: the tree was exhausted, or the gap tolerance was reached.
/// * `Feasible`: the node budget ran out while an integral solution was known.
/// * `Infeasible`: no integral solution was found. There is no solution in that case.
/// * `Unbounded`: the root relaxation is unbounded.
/// * `MaxIter`: the root relaxation ran out of pivots.
///
/// The input is assumed to be well formed, see `try_solve_milp` for a checked version.
pub fn solve_milp<F, R>(
    c: &[F],
    a: &[R],
    b: &[F],
    integers: &[usize],
    config: MilpConfig<F>,
) -> Solution<Option<Vec<F>>, F>
where
    F: Float,
    R: AsRef<[F]>,
{
    solve_milp_with_statistics(c, a, b, integers, config).0
}

/// Check the input and then solve it with `solve_milp`.
///
/// # Errors
///
/// When the dimensions don't match, when the data contains values that are not finite, when an
/// integer index is out of range or when the tolerance is not positive.
pub fn try_solve_milp<F, R>(
    c: &[F],
    a: &[R],
    b: &[F],
    integers: &[usize],
    config: MilpConfig<F>,
) -> Result<Solution<Option<Vec<F>>, F>, ValidationError>
where
    F: Float,
    R: AsRef<[F]>,
{
    check_matrix_dims(c, a, b)?;
    check_finite(c, a, b)?;
    check_integers_valid(integers, c.len())?;
    check_tolerance("eps", config.eps)?;
    warn_large_coefficients(a);

    Ok(solve_milp(c, a, b, integers, config))
}

/// Like `solve_milp`, but also report what happened in the search tree.
pub fn solve_milp_with_statistics<F, R>(
    c: &[F],
    a: &[R],
    b: &[F],
    integers: &[usize],
    config: MilpConfig<F>,
) -> (Solution<Option<Vec<F>>, F>, SearchStatistics)
where
    F: Float,
    R: AsRef<[F]>,
{
    let problem = MatrixData::new(c, a, b);
    let integers = integers.iter().copied().sorted_unstable().dedup().collect::<Vec<_>>();
    let lp_config = config.lp_config();
    let objective = config.objective;
    let sign = objective.sign::<F>();
    let eps = config.eps;
    let mut statistics = SearchStatistics::default();

    let root = Node::root(c.len(), F::zero());
    let relaxation = solve_bounded(&problem, root.lower(), root.upper(), lp_config);
    let mut total_pivots = relaxation.evaluations();

    let without_solution = |value: F, pivots: usize, status: Status| -> Solution<Option<Vec<F>>, F> {
        Solution::new(None, value, 0, pivots, status)
    };
    match relaxation.status() {
        Status::Infeasible => {
            info!("root relaxation is infeasible");
            return (without_solution(objective.infeasible_value(), total_pivots, Status::Infeasible), statistics);
        },
        Status::Unbounded => {
            info!("root relaxation is unbounded");
            return (without_solution(objective.unbounded_value(), total_pivots, Status::Unbounded), statistics);
        },
        Status::MaxIter => {
            info!("root relaxation ran out of pivots");
            return (without_solution(objective.infeasible_value(), total_pivots, Status::MaxIter), statistics);
        },
        Status::Optimal | Status::Feasible => {},
    }

    if most_fractional(relaxation.solution(), &integers, eps).is_none() {
        info!("root relaxation is integral");
        let value = relaxation.objective();
        return (
            Solution::new(Some(relaxation.into_solution()), value, 1, total_pivots, Status::Optimal),
            statistics,
        );
    }

    let mut queue = NodeQueue::new();
    queue.push(Node::root(c.len(), sign * relaxation.objective()));
    let mut incumbent = Incumbent::new(objective);
    let mut nodes_explored = 0;

    while nodes_explored < config.max_nodes {
        let Some(node) = queue.pop() else { break };

        if incumbent.dominates(node.bound(), eps) {
            statistics.record(NodeOutcome::Pruned);
            continue;
        }

        let relaxation = solve_bounded(&problem, node.lower(), node.upper(), lp_config);
        total_pivots += relaxation.evaluations();
        nodes_explored += 1;
        statistics.on_node_explored(node.depth());

        if relaxation.status() != Status::Optimal {
            debug!("node at depth {}: relaxation {}", node.depth(), relaxation.status());
            statistics.record(NodeOutcome::NotOptimal);
            continue;
        }

        let value = relaxation.objective();
        if incumbent.dominates(sign * value, eps) {
            statistics.record(NodeOutcome::Dominated);
            continue;
        }

        match most_fractional(relaxation.solution(), &integers, eps) {
            None => {
                if !incumbent.try_install(relaxation.into_solution(), value) {
                    statistics.record(NodeOutcome::Dominated);
                    continue;
                }
                statistics.record(NodeOutcome::Incumbent);
                debug!(
                    "node at depth {}: new incumbent {:e}",
                    node.depth(),
                    value.to_f64().unwrap_or(f64::NAN),
                );

                let relative_gap = gap(value, sign * node.bound());
                if relative_gap < config.gap_tol {
                    info!("gap {:e} closed after {nodes_explored} nodes", relative_gap.to_f64().unwrap_or(f64::NAN));
                    return (finish(incumbent, nodes_explored, total_pivots, Status::Optimal), statistics);
                }
            },
            Some(variable) => {
                let (down, up) = node.branch(variable, relaxation.solution()[variable], sign * value);
                queue.push(down);
                queue.push(up);
                statistics.record(NodeOutcome::Branched);
            },
        }
    }

    let status = if !incumbent.is_some() {
        Status::Infeasible
    } else if queue.is_empty() {
        Status::Optimal
    } else {
        Status::Feasible
    };
    info!("search ended after {nodes_explored} nodes with {} open: {status}", queue.len());

    (finish(incumbent, nodes_explored, total_pivots, status), statistics)
}

/// Build the result from the incumbent, if there is one.
fn finish<F: Float>(
    incumbent: Incumbent<F>,
    nodes_explored: usize,
    total_pivots: usize,
    status: Status,
) -> Solution<Option<Vec<F>>, F> {
    let value = incumbent.objective_value();
    let solution = incumbent.into_inner().map(|(solution, _)| solution);
    Solution::new(solution, value, nodes_explored, total_pivots, status)
}

/// Integer variable furthest away from an integral value.
///
/// Only variables more than `eps` away from an integer are considered. Ties go to the lowest
/// index.
///
/// # Arguments
///
/// * `solution`: Values of all variables.
/// * `integers`: Sorted indices of the integer variables.
/// * `eps`: Integrality tolerance.
fn most_fractional<F: Float>(solution: &[F], integers: &[usize], eps: F) -> Option<usize> {
    let mut best = None;
    let mut best_fractionality = F::zero();

    for &j in integers {
        if is_integral(solution[j], eps) {
            continue;
        }

        let fractionality = fractionality(solution[j]);
        if fractionality > best_fractionality {
            best = Some(j);
            best_fractionality = fractionality;
        }
    }

    best
}

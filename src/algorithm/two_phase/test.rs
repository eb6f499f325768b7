use approx::assert_abs_diff_eq;

use crate::algorithm::SolveRelaxation;
use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
use crate::algorithm::two_phase::{solve_lp, try_solve_lp};
use crate::data::linear_program::config::LpConfig;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::validate::ValidationError;

fn is_feasible(constraints: &[Vec<f64>], b: &[f64], x: &[f64], eps: f64) -> bool {
    x.iter().all(|&v| v >= -eps)
        && constraints.iter().zip(b).all(|(row, &bound)| {
            row.iter().zip(x).map(|(a, v)| a * v).sum::<f64>() <= bound + eps
        })
}

#[test]
fn minimize_with_phase_one() {
    let result = solve_lp(&[1f64, 2f64], &[vec![-1f64, -1f64]], &[-2f64], LpConfig::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[1], 0f64, epsilon = 1e-9);
    assert_eq!(result.iterations(), result.evaluations());
}

#[test]
fn maximize() {
    let result = solve_lp(
        &[1f64, 1f64],
        &[vec![1f64, 1f64], vec![1f64, 0f64]],
        &[4f64, 3f64],
        LpConfig::default().maximize(),
    );

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 4f64, epsilon = 1e-9);
}

#[test]
fn infeasible() {
    let result = solve_lp(&[1f64], &[vec![-1f64], vec![1f64]], &[-1f64, 0f64], LpConfig::default());

    assert_eq!(result.status(), Status::Infeasible);
    assert_eq!(result.solution(), &vec![0f64]);
    assert_eq!(result.objective(), f64::INFINITY);
}

#[test]
fn infeasible_maximize() {
    let result = solve_lp(&[1f64], &[vec![-1f64], vec![1f64]], &[-1f64, 0f64], LpConfig::default().maximize());

    assert_eq!(result.status(), Status::Infeasible);
    assert_eq!(result.objective(), f64::NEG_INFINITY);
}

#[test]
fn unbounded() {
    let result = solve_lp(&[-1f64, 0f64], &[vec![0f64, 1f64]], &[1f64], LpConfig::default());

    assert_eq!(result.status(), Status::Unbounded);
    assert_eq!(result.objective(), f64::NEG_INFINITY);
}

#[test]
fn unbounded_maximize() {
    let result = solve_lp(&[1f64, 0f64], &[vec![0f64, 1f64]], &[1f64], LpConfig::default().maximize());

    assert_eq!(result.status(), Status::Unbounded);
    assert_eq!(result.objective(), f64::INFINITY);
}

#[test]
fn no_constraints() {
    let empty: [Vec<f64>; 0] = [];
    let result = solve_lp(&[1f64, 3f64], &empty, &[], LpConfig::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_eq!(result.solution(), &vec![0f64, 0f64]);
    assert_eq!(result.objective(), 0f64);
    assert_eq!(result.iterations(), 0);
}

#[test]
fn textbook_maximization() {
    // max 3x + 5y s.t. x <= 4, 2y <= 12, 3x + 2y <= 18
    let constraints = vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]];
    let b = [4f64, 12f64, 18f64];
    let result = solve_lp(&[3f64, 5f64], &constraints, &b, LpConfig::default().maximize());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 36f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[1], 6f64, epsilon = 1e-9);
    assert!(is_feasible(&constraints, &b, result.solution(), 1e-9));
}

#[test]
fn covering_constraints() {
    // min x + y s.t. x + 2y >= 4, 3x + y >= 6
    let constraints = vec![vec![-1f64, -2f64], vec![-3f64, -1f64]];
    let b = [-4f64, -6f64];
    let result = solve_lp(&[1f64, 1f64], &constraints, &b, LpConfig::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 2.8f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[0], 1.6f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[1], 1.2f64, epsilon = 1e-9);
    assert!(is_feasible(&constraints, &b, result.solution(), 1e-9));
}

#[test]
fn equality_as_two_inequalities() {
    // min 2x + y s.t. x + y == 3
    let constraints = vec![vec![1f64, 1f64], vec![-1f64, -1f64]];
    let b = [3f64, -3f64];
    let result = solve_lp(&[2f64, 1f64], &constraints, &b, LpConfig::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 3f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[1], 3f64, epsilon = 1e-9);
}

#[test]
fn iteration_limit_in_phase_two() {
    let constraints = vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]];
    let b = [4f64, 12f64, 18f64];
    let result = solve_lp(&[3f64, 5f64], &constraints, &b, LpConfig::default().maximize().with_max_iter(1));

    assert_eq!(result.status(), Status::MaxIter);
    assert_eq!(result.iterations(), 1);
    // The vertex reached so far is feasible
    assert!(is_feasible(&constraints, &b, result.solution(), 1e-9));
}

#[test]
fn iteration_limit_in_phase_one() {
    let result = solve_lp(&[1f64, 2f64], &[vec![-1f64, -1f64]], &[-2f64], LpConfig::default().with_max_iter(0));

    assert_eq!(result.status(), Status::MaxIter);
    assert_eq!(result.iterations(), 0);
    assert_eq!(result.objective(), f64::INFINITY);
}

#[test]
fn deterministic() {
    let constraints = vec![vec![-1f64, -2f64], vec![-3f64, -1f64], vec![1f64, 1f64]];
    let b = [-4f64, -6f64, 10f64];
    let first = solve_lp(&[1f64, 1f64], &constraints, &b, LpConfig::default());
    let second = solve_lp(&[1f64, 1f64], &constraints, &b, LpConfig::default());

    assert_eq!(first, second);
}

#[test]
fn through_trait() {
    let cost = [-1f64, -1f64];
    let constraints = [[1f64, 2f64], [2f64, 1f64]];
    let b = [4f64, 4f64];
    let result = MatrixData::new(&cost, &constraints, &b).solve_relaxation(LpConfig::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), -8f64 / 3f64, epsilon = 1e-9);
}

#[test]
fn single_precision() {
    let result = solve_lp(&[1f32, 2f32], &[vec![-1f32, -1f32]], &[-2f32], LpConfig::default().with_eps(1e-6));

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 2f32, epsilon = 1e-5);
}

#[test]
fn checked() {
    let result = try_solve_lp(&[1f64, 2f64], &[vec![-1f64, -1f64]], &[-2f64], LpConfig::default());
    assert!(result.is_ok());

    let result = try_solve_lp(&[1f64, 2f64], &[vec![-1f64]], &[-2f64], LpConfig::default());
    assert!(matches!(result, Err(ValidationError::DimensionMismatch { .. })));

    let result = try_solve_lp(&[1f64], &[vec![-1f64]], &[-2f64], LpConfig::default().with_eps(-1f64));
    assert_eq!(result, Err(ValidationError::InvalidTolerance { name: "eps" }));
}

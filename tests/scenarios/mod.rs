//! # Small problems with known outcomes
use approx::assert_abs_diff_eq;

use simplex_bnb::{solve_lp, solve_milp, LpConfig, MilpConfig, Status};

#[test]
fn covering() {
    // min x + 2y s.t. x + y >= 2
    let result = solve_lp(&[1f64, 2f64], &[[-1f64, -1f64]], &[-2f64], LpConfig::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution()[1], 0f64, epsilon = 1e-9);
}

#[test]
fn maximize() {
    // max x + y s.t. x + y <= 4, x <= 3
    let result = solve_lp(
        &[1f64, 1f64],
        &[[1f64, 1f64], [1f64, 0f64]],
        &[4f64, 3f64],
        LpConfig::default().with_minimize(false),
    );

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 4f64, epsilon = 1e-9);
}

#[test]
fn conflicting_bounds() {
    // x >= 1 and x <= 0
    let result = solve_lp(&[1f64], &[[-1f64], [1f64]], &[-1f64, 0f64], LpConfig::default());

    assert_eq!(result.status(), Status::Infeasible);
}

#[test]
fn unbounded_direction() {
    // min -x s.t. y <= 1
    let result = solve_lp(&[-1f64, 0f64], &[[0f64, 1f64]], &[1f64], LpConfig::default());

    assert_eq!(result.status(), Status::Unbounded);
    assert_eq!(result.objective(), f64::NEG_INFINITY);
}

#[test]
fn pure_integer_covering() {
    // min x + y s.t. x + y >= 3, both integral
    let result = solve_milp(&[1f64, 1f64], &[[-1f64, -1f64]], &[-3f64], &[0, 1], MilpConfig::default());

    assert!(result.status().is_success());
    assert_abs_diff_eq!(result.objective(), 3f64, epsilon = 1e-6);
    let solution = result.into_solution().unwrap();
    for x in solution {
        assert_abs_diff_eq!(x, x.round(), epsilon = 1e-6);
    }
}

#[test]
fn assignment_relaxation_is_integral() {
    // Two workers, two jobs, costs [[4, 1], [2, 3]], equalities as pairs of inequalities
    let c = [4f64, 1f64, 2f64, 3f64];
    let a = [
        [1f64, 1f64, 0f64, 0f64],
        [-1f64, -1f64, 0f64, 0f64],
        [0f64, 0f64, 1f64, 1f64],
        [0f64, 0f64, -1f64, -1f64],
        [1f64, 0f64, 1f64, 0f64],
        [-1f64, 0f64, -1f64, 0f64],
        [0f64, 1f64, 0f64, 1f64],
        [0f64, -1f64, 0f64, -1f64],
    ];
    let b = [1f64, -1f64, 1f64, -1f64, 1f64, -1f64, 1f64, -1f64];

    let result = solve_milp(&c, &a, &b, &[0, 1, 2, 3], MilpConfig::default());
    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 3f64, epsilon = 1e-6);
    assert_eq!(result.iterations(), 1);
    let solution = result.into_solution().unwrap();
    assert_abs_diff_eq!(solution[1], 1f64, epsilon = 1e-6);
    assert_abs_diff_eq!(solution[2], 1f64, epsilon = 1e-6);
}

#[test]
fn single_precision() {
    let config = MilpConfig::<f32>::default().maximize();
    let result = solve_milp(
        &[5f32, 4f32],
        &[[6f32, 4f32], [1f32, 2f32]],
        &[24f32, 6f32],
        &[0, 1],
        config,
    );

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), 20f32, epsilon = 1e-3);
}

//! # Properties that hold for every problem
use proptest::prelude::*;

use simplex_bnb::{solve_lp, solve_milp, LpConfig, MilpConfig, Status};

const TOLERANCE: f64 = 1e-6;

/// Cost vector, constraint matrix and right hand side with small integral entries.
///
/// Right hand sides may be negative, so that the first phase is needed.
fn problem() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<f64>>, Vec<f64>)> {
    (1..=4usize, 1..=4usize).prop_flat_map(|(n, m)| (
        prop::collection::vec(-5i32..=5, n),
        prop::collection::vec(prop::collection::vec(-5i32..=5, n), m),
        prop::collection::vec(-5i32..=10, m),
    )).prop_map(|(c, a, b)| (
        c.into_iter().map(f64::from).collect(),
        a.into_iter().map(|row| row.into_iter().map(f64::from).collect()).collect(),
        b.into_iter().map(f64::from).collect(),
    ))
}

/// Like `problem`, but with `0` feasible and every variable at most `4`.
fn bounded_problem() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<f64>>, Vec<f64>)> {
    (1..=3usize, 1..=3usize).prop_flat_map(|(n, m)| (
        prop::collection::vec(-5i32..=5, n),
        prop::collection::vec(prop::collection::vec(-5i32..=5, n), m),
        prop::collection::vec(0i32..=10, m),
    )).prop_map(|(c, a, b)| {
        let n = c.len();
        let mut rows = a.into_iter()
            .map(|row| row.into_iter().map(f64::from).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let mut b = b.into_iter().map(f64::from).collect::<Vec<_>>();
        for j in 0..n {
            let mut row = vec![0f64; n];
            row[j] = 1f64;
            rows.push(row);
            b.push(4f64);
        }

        (c.into_iter().map(f64::from).collect(), rows, b)
    })
}

fn is_feasible(a: &[Vec<f64>], b: &[f64], x: &[f64]) -> bool {
    x.iter().all(|&value| value >= -TOLERANCE)
        && a.iter().zip(b).all(|(row, &bound)| {
            row.iter().zip(x).map(|(coefficient, value)| coefficient * value).sum::<f64>() <= bound + TOLERANCE
        })
}

proptest! {
    #[test]
    fn lp_solutions_are_feasible((c, a, b) in problem(), minimize in proptest::bool::ANY) {
        let result = solve_lp(&c, &a, &b, LpConfig::default().with_minimize(minimize));

        if result.status() == Status::Optimal {
            prop_assert!(is_feasible(&a, &b, result.solution()));
            let objective = c.iter().zip(result.solution()).map(|(cost, x)| cost * x).sum::<f64>();
            prop_assert!((objective - result.objective()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn maximizing_is_minimizing_the_negation((c, a, b) in problem()) {
        let negated = c.iter().map(|&cost| -cost).collect::<Vec<_>>();

        let minimized = solve_lp(&c, &a, &b, LpConfig::default());
        let maximized = solve_lp(&negated, &a, &b, LpConfig::default().maximize());

        prop_assert_eq!(minimized.status(), maximized.status());
        prop_assert_eq!(minimized.objective(), -maximized.objective());
        prop_assert_eq!(minimized.solution(), maximized.solution());
    }

    #[test]
    fn solving_is_deterministic((c, a, b) in problem()) {
        let first = solve_lp(&c, &a, &b, LpConfig::default());
        let second = solve_lp(&c, &a, &b, LpConfig::default());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn milp_solutions_are_integral((c, a, b) in bounded_problem(), minimize in proptest::bool::ANY) {
        let integers = (0..c.len()).collect::<Vec<_>>();
        let config = MilpConfig::default().with_minimize(minimize);
        let result = solve_milp(&c, &a, &b, &integers, config);

        // Zero is feasible and the box is bounded
        prop_assert!(result.status().is_success());
        let solution = result.solution().as_ref().unwrap();
        prop_assert!(is_feasible(&a, &b, solution));
        for &x in solution {
            prop_assert!((x - x.round()).abs() <= config.eps);
        }
    }

    #[test]
    fn milp_is_bounded_by_its_relaxation((c, a, b) in bounded_problem()) {
        let integers = (0..c.len()).collect::<Vec<_>>();
        let milp = solve_milp(&c, &a, &b, &integers, MilpConfig::default());
        let lp = solve_lp(&c, &a, &b, LpConfig::default());

        prop_assert_eq!(lp.status(), Status::Optimal);
        if milp.status() == Status::Optimal {
            prop_assert!(milp.objective() >= lp.objective() - TOLERANCE);
        }
    }
}

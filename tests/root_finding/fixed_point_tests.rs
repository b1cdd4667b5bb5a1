//! tests for fixed-point iteration

use approx::assert_abs_diff_eq;
use river::root_finding::errors::RootFindingError;
use river::root_finding::fixed_point::fixed_point;
use river::root_finding::{Callback, Config, TerminationReason};

type TestResult = Result<(), RootFindingError>;

#[test]
fn converges_for_contraction() -> TestResult {
    // x^2 - x - 2 = 0 rearranged
    let g = |x: f64| (x + 2.0).sqrt();
    let res = fixed_point(g, 1.0, Config::default())?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.0, epsilon = 1e-9);
    assert_eq!(res.iterations, 16);
    assert_eq!(res.stencil.stencil().len(), 1);
    assert_eq!(res.algorithm_name, "fixed_point");
    Ok(())
}

#[test]
fn slow_contraction_hits_iteration_limit() -> TestResult {
    let res = fixed_point(f64::cos, 1.0, Config::default())?;

    // exclusive bound: max_iteration - 1 updates
    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 49);
    assert_eq!(res.relative_errors.len(), 49);
    assert_abs_diff_eq!(res.root, 0.739_085_133_2, epsilon = 1e-8);
    Ok(())
}

#[test]
fn small_limit_returns_latest_estimate() -> TestResult {
    let cfg = Config::new().set_max_iteration(3)?;
    let res = fixed_point(f64::cos, 1.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 2);
    assert_abs_diff_eq!(res.root, 1.0_f64.cos().cos(), epsilon = 1e-15);
    Ok(())
}

#[test]
fn single_iteration_limit_runs_no_updates() -> TestResult {
    let cfg = Config::new().set_max_iteration(1)?;
    let res = fixed_point(|x: f64| (x + 2.0).sqrt(), 1.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.last_error, None);
    Ok(())
}

#[test]
fn growing_map_is_flagged_divergent() {
    let err = fixed_point(|x: f64| x * x, 2.0, Config::default()).unwrap_err();
    match err {
        RootFindingError::DivergentIteration { iteration, errors } => {
            assert_eq!(iteration, 3);
            assert_eq!(errors, [0.5, 0.75, 0.9375]);
        }
        other => panic!("expected DivergentIteration, got {other:?}"),
    }
}

#[test]
fn divergence_check_can_be_disabled() -> TestResult {
    let cfg = Config::new()
        .set_max_iteration(6)?
        .set_divergent_skip(false);
    let res = fixed_point(|x: f64| x * x, 2.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 5);
    assert_eq!(res.root, 4_294_967_296.0);
    Ok(())
}

#[test]
fn infinite_map_value_is_reported() {
    let err = fixed_point(f64::ln, 0.0, Config::default()).unwrap_err();
    assert!(matches!(
        err,
        RootFindingError::InvalidFunctionResult { callback: Callback::G, x, value }
        if x == 0.0 && value == f64::NEG_INFINITY
    ));
}

#[test]
fn non_finite_guess_is_rejected() {
    let err = fixed_point(f64::cos, f64::NAN, Config::default()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidGuess { x } if x.is_nan()));
}

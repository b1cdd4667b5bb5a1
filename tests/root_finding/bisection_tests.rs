//! tests for bisection

use approx::assert_abs_diff_eq;
use river::root_finding::bisection::bisection;
use river::root_finding::errors::RootFindingError;
use river::root_finding::{Config, Stencil, TerminationReason};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 1.0, 2.0, Config::default())?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-8);
    assert_eq!(res.iterations, 30);
    assert_eq!(res.relative_errors.len(), res.iterations);
    assert!(res.last_error.is_some_and(|e| e <= 1e-9));
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn reversed_bracket_gives_same_root() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let forward  = bisection(f, 1.0, 2.0, Config::default())?;
    let reversed = bisection(f, 2.0, 1.0, Config::default())?;

    assert_eq!(reversed.termination, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(reversed.root, forward.root, epsilon = 1e-8);
    Ok(())
}

#[test]
fn final_bracket_encloses_root() -> TestResult {
    let f = |x: f64| x.powi(4) - 3.0 * x * x - 7.0;
    let res = bisection(f, 2.0, 3.0, Config::default())?;
    let exact = ((3.0 + 37.0_f64.sqrt()) / 2.0).sqrt();

    assert_eq!(res.iterations, 29);
    assert_abs_diff_eq!(res.root, exact, epsilon = 1e-8);

    let Stencil::Bracket { bounds: [a, b] } = res.stencil else {
        panic!("expected bracket stencil, got {:?}", res.stencil);
    };
    assert!(a.min(b) <= exact && exact <= a.max(b));
    assert!(f(a) * f(b) < 0.0);
    Ok(())
}

#[test]
fn exact_midpoint_stops_early() -> TestResult {
    let res = bisection(|x: f64| x - 3.0, 2.0, 4.0, Config::default())?;

    assert_eq!(res.termination, TerminationReason::ExactRoot);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn exact_endpoint_returns_without_iterating() -> TestResult {
    let res = bisection(|x: f64| x - 2.0, 2.0, 5.0, Config::default())?;

    assert_eq!(res.termination, TerminationReason::ExactRoot);
    assert_eq!(res.root, 2.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.last_error, None);
    Ok(())
}

#[test]
fn midpoint_at_zero_returns_zero() -> TestResult {
    let res = bisection(|x: f64| x, -1.0, 1.0, Config::default())?;

    assert_eq!(res.termination, TerminationReason::ZeroEstimate);
    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn stops_at_iteration_limit() -> TestResult {
    let cfg = Config::new().set_max_iteration(5)?;
    let res = bisection(|x: f64| x * x - 2.0, 1.0, 2.0, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert!(!res.converged());
    assert_eq!(res.iterations, 5);
    assert_eq!(res.relative_errors.len(), 5);
    assert_eq!(res.root, 1.40625);
    Ok(())
}

#[test]
fn bracket_without_sign_change_fails() {
    let err = bisection(|x: f64| x * x + 1.0, -1.0, 1.0, Config::default()).unwrap_err();
    assert!(matches!(
        err,
        RootFindingError::NoSignChange { a, b, .. } if a == -1.0 && b == 1.0
    ));
}

#[test]
fn degenerate_bracket_fails() {
    let err = bisection(|x: f64| x - 1.0, 1.0, 1.0, Config::default()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBracket { .. }));

    let err = bisection(|x: f64| x - 1.0, f64::NEG_INFINITY, 1.0, Config::default()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBracket { .. }));
}

#[test]
fn nan_at_endpoint_is_reported() {
    let err = bisection(|x: f64| x.sqrt() - 2.0, -1.0, 5.0, Config::default()).unwrap_err();
    assert!(matches!(
        err,
        RootFindingError::InvalidFunctionResult { x, value, .. } if x == -1.0 && value.is_nan()
    ));
}

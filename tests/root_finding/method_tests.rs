//! tests for name-based method selection

use approx::assert_abs_diff_eq;
use river::root_finding::algorithms::{ALL_ALGORITHMS, METHOD_NAMES};
use river::root_finding::errors::{ConfigError, MethodError, RootFindingError};
use river::root_finding::{
    bisection::bisection, false_position::false_position, fixed_point::fixed_point,
    newton::newton_raphson, newton2::newton_raphson2, ralston_rabinowitz::ralston_rabinowitz,
    secant::secant,
};
use river::root_finding::{
    create_method, Algorithm, BracketFamily, Callback, Config, Equation, Guess, OpenFamily,
    RootFinder, RootFindingReport, TerminationReason,
};

type TestResult = Result<(), RootFindingError>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("river=trace"))
        .with_test_writer()
        .try_init();
}

fn sqrt2_equation() -> Equation<'static> {
    Equation::new(|x: f64| x * x - 2.0)
        .with_derivative(|x: f64| 2.0 * x)
        .with_second_derivative(|_x: f64| 2.0)
}

#[test]
fn every_registered_name_resolves() -> TestResult {
    for &(name, algorithm) in METHOD_NAMES {
        let finder = create_method(name, None)?;
        assert_eq!(finder.algorithm(), algorithm);
        assert_eq!(finder.config(), &Config::default());
    }
    Ok(())
}

#[test]
fn names_are_matched_loosely() -> TestResult {
    for name in ["Newton-Raphson", "newton_raphson", "NEWTON RAPHSON", "newtonraphson"] {
        assert_eq!(
            create_method(name, None)?.algorithm(),
            Algorithm::Open(OpenFamily::NewtonRaphson)
        );
    }
    assert_eq!(
        create_method("Regula-Falsi", None)?.algorithm(),
        Algorithm::Bracket(BracketFamily::FalsePosition)
    );
    Ok(())
}

#[test]
fn unknown_name_is_rejected() {
    let err = create_method("muller", None).unwrap_err();
    assert!(matches!(err, MethodError::UnknownMethod { ref name } if name == "muller"));
    assert!(err.to_string().contains("muller"));
}

#[test]
fn every_method_finds_sqrt_2() -> TestResult {
    init_tracing();
    for algorithm in ALL_ALGORITHMS {
        let mut finder = RootFinder::new(algorithm);
        let report = match algorithm {
            // g(x) = x - (x² - 2) / 3 is a contraction near sqrt(2)
            Algorithm::Open(OpenFamily::FixedPoint) => {
                finder.compute(Equation::new(|x: f64| x - (x * x - 2.0) / 3.0), 1.0)?
            }
            _ if algorithm.guess_count() == 2 => finder.compute(sqrt2_equation(), (1.0, 2.0))?,
            _ => finder.compute(sqrt2_equation(), 1.0)?,
        };

        assert!(report.converged(), "{algorithm} did not converge");
        assert_abs_diff_eq!(report.root, 2.0_f64.sqrt(), epsilon = 1e-7);
        assert_eq!(report.algorithm_name, algorithm.algorithm_name());
        assert_eq!(finder.iteration_count(), report.iterations);
        assert_eq!(finder.last_relative_error(), report.last_error);
    }
    Ok(())
}

fn run(name: &str, guess: Guess, eq: Equation<'_>) -> Result<RootFindingReport, RootFindingError> {
    create_method(name, None)?.compute(eq, guess)
}

#[test]
fn instance_matches_free_functions() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let d2f = |_x: f64| 2.0;
    let g   = |x: f64| x - (x * x - 2.0) / 3.0;
    let cfg = Config::default();

    let full = || Equation::new(f).with_derivative(df).with_second_derivative(d2f);

    assert_eq!(run("bisection", Guess::Pair(1.0, 2.0), full())?, bisection(f, 1.0, 2.0, cfg)?);
    assert_eq!(run("false position", Guess::Pair(1.0, 2.0), full())?, false_position(f, 1.0, 2.0, cfg)?);
    assert_eq!(run("fixed-point", Guess::Single(1.0), Equation::new(g))?, fixed_point(g, 1.0, cfg)?);
    assert_eq!(run("secant", Guess::Pair(1.0, 2.0), full())?, secant(f, 1.0, 2.0, cfg)?);
    assert_eq!(run("newton", Guess::Single(1.0), full())?, newton_raphson(f, df, 1.0, cfg)?);
    assert_eq!(run("newton-raphson2", Guess::Single(1.0), full())?, newton_raphson2(f, df, d2f, 1.0, cfg)?);
    assert_eq!(run("ralston-rabinowitz", Guess::Pair(1.0, 2.0), full())?, ralston_rabinowitz(f, df, 1.0, 2.0, cfg)?);
    Ok(())
}

#[test]
fn repeated_calls_are_independent() -> TestResult {
    let mut finder = create_method("secant", None)?;
    let first  = finder.compute(Equation::new(|x: f64| x.cos() - x), (0.0, 1.0))?;
    let second = finder.compute(Equation::new(|x: f64| x.cos() - x), (0.0, 1.0))?;

    assert_eq!(first, second);
    assert_eq!(finder.iteration_count(), 6);
    Ok(())
}

#[test]
fn set_config_applies_to_next_call() -> TestResult {
    let mut finder = create_method("fixed point", None)?;
    finder.set_config(Config::new().set_max_iteration(3)?);

    let report = finder.compute(Equation::new(f64::cos), 1.0)?;
    assert_eq!(report.termination, TerminationReason::IterationLimit);
    assert_eq!(finder.iteration_count(), 2);
    Ok(())
}

#[test]
fn missing_derivative_is_reported_before_evaluating() {
    let mut calls = 0;
    let mut finder = RootFinder::new(Algorithm::Open(OpenFamily::RalstonRabinowitz));
    let err = finder
        .compute(Equation::new(|x: f64| { calls += 1; x - 1.0 }), (0.0, 2.0))
        .unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Method(MethodError::MissingCallback { callback: Callback::Df, .. })
    ));
    assert_eq!(calls, 0);
}

#[test]
fn wrong_guess_count_is_reported() {
    let mut finder = RootFinder::new(Algorithm::Open(OpenFamily::Secant));
    let err = finder.compute(Equation::new(|x: f64| x - 1.0), 0.5).unwrap_err();
    assert!(matches!(
        err,
        RootFindingError::Method(MethodError::GuessCount { expected: 2, got: 1, .. })
    ));
}

#[test]
fn invalid_settings_are_rejected() {
    assert!(matches!(
        Config::new().set_max_iteration(0),
        Err(ConfigError::InvalidMaxIteration { got: 0 })
    ));
    assert!(matches!(
        Config::new().set_err_tolerance(-1e-6),
        Err(ConfigError::InvalidErrTolerance { .. })
    ));
    assert!(matches!(
        Config::new().set_err_tolerance(f64::NAN),
        Err(ConfigError::InvalidErrTolerance { got }) if got.is_nan()
    ));
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() -> Result<(), serde_json::Error> {
        let cfg: Config = serde_json::from_str(r#"{ "max_iteration": 10 }"#)?;
        assert_eq!(cfg.max_iteration(), 10);
        assert_eq!(cfg.err_tolerance(), 1e-9);
        assert!(cfg.divergent_skip());
        Ok(())
    }

    #[test]
    fn deserialized_config_is_validated_on_use() -> Result<(), serde_json::Error> {
        let cfg: Config = serde_json::from_str(r#"{ "err_tolerance": -1.0 }"#)?;
        let mut finder = RootFinder::with_config(Algorithm::Open(OpenFamily::FixedPoint), cfg);

        let err = finder.compute(Equation::new(f64::cos), 1.0).unwrap_err();
        assert!(matches!(err, RootFindingError::Config(ConfigError::InvalidErrTolerance { .. })));
        Ok(())
    }

    #[test]
    fn report_serializes_termination() -> Result<(), Box<dyn std::error::Error>> {
        let report = create_method("bisection", None)?
            .compute(Equation::new(|x: f64| x - 3.0), (2.0, 4.0))?;
        let json = serde_json::to_value(&report)?;
        assert_eq!(json["termination"], "ExactRoot");
        assert_eq!(json["algorithm_name"], "bisection");
        Ok(())
    }
}

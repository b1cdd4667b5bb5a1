//! Method selection by name and the stateful [`RootFinder`] instance.
//!
//! ```
//! use river::root_finding::{create_method, Config, Equation, Guess};
//!
//! let cfg = Config::new().set_err_tolerance(1e-12)?;
//! let mut finder = create_method("Secant", Some(cfg))?;
//! let report = finder.compute(Equation::new(|x: f64| x.powi(3) - 8.0), (1.0, 3.0))?;
//!
//! assert!((report.root - 2.0).abs() < 1e-10);
//! assert_eq!(finder.last_relative_error(), report.last_error);
//! # Ok::<(), river::root_finding::errors::RootFindingError>(())
//! ```

use tracing::debug;

use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::config::Config;
use super::equation::{Callback, Equation};
use super::errors::{MethodError, RootFindingError};
use super::report::RootFindingReport;
use super::{
    bisection::bisection,
    false_position::false_position,
    fixed_point::fixed_point,
    newton::newton_raphson,
    newton2::newton_raphson2,
    ralston_rabinowitz::ralston_rabinowitz,
    secant::secant,
};


/// Initial guess(es) for [`RootFinder::compute`].
///
/// Bracketing methods read a [`Guess::Pair`] as the bracket `[a, b]`;
/// two-point open methods read it as `(x_{k-1}, x_k)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Guess {
    Single(f64),
    Pair(f64, f64),
}
impl Guess {
    pub const fn count(&self) -> usize {
        match self {
            Guess::Single(..) => 1,
            Guess::Pair(..)   => 2,
        }
    }
}
impl From<f64> for Guess {
    fn from(x: f64) -> Self {
        Guess::Single(x)
    }
}
impl From<(f64, f64)> for Guess {
    fn from((x0, x1): (f64, f64)) -> Self {
        Guess::Pair(x0, x1)
    }
}
impl From<[f64; 2]> for Guess {
    fn from([x0, x1]: [f64; 2]) -> Self {
        Guess::Pair(x0, x1)
    }
}


/// A root-finding method bound to a configuration.
///
/// After each successful [`RootFinder::compute`] the iteration count and
/// final relative error of that run stay readable on the instance until the
/// next call. The returned [`RootFindingReport`] carries the same values and
/// more; prefer it.
#[derive(Debug, Clone)]
pub struct RootFinder {
    algorithm:           Algorithm,
    config:              Config,
    iteration_count:     usize,
    last_relative_error: Option<f64>,
}

/// Builds a [`RootFinder`] for a registered method name.
///
/// # Errors
/// - [`MethodError::UnknownMethod`] if `name` is not in
///   [`METHOD_NAMES`](super::algorithms::METHOD_NAMES).
pub fn create_method(name: &str, config: Option<Config>) -> Result<RootFinder, MethodError> {
    let algorithm = Algorithm::from_name(name)?;
    Ok(RootFinder::with_config(algorithm, config.unwrap_or_default()))
}

impl RootFinder {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_config(algorithm, Config::default())
    }

    pub fn with_config(algorithm: Algorithm, config: Config) -> Self {
        Self { algorithm, config, iteration_count: 0, last_relative_error: None }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
    pub fn config(&self) -> &Config { &self.config }

    /// Replaces the configuration used by subsequent calls.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Iterations performed by the last successful call, `0` before any.
    pub fn iteration_count(&self) -> usize { self.iteration_count }

    /// Relative error of the last iteration of the last successful call.
    pub fn last_relative_error(&self) -> Option<f64> { self.last_relative_error }

    /// Runs the method on `equation` from `guess`.
    ///
    /// Instance counters are reset at the start and set from the report
    /// on success.
    ///
    /// # Errors
    /// - [`MethodError::GuessCount`]      : wrong number of guesses for the method
    /// - [`MethodError::MissingCallback`] : a required derivative was not supplied
    /// - anything the method itself returns (see the per-method functions)
    pub fn compute(
        &mut self,
        equation: Equation<'_>,
        guess: impl Into<Guess>,
    ) -> Result<RootFindingReport, RootFindingError> {
        self.iteration_count = 0;
        self.last_relative_error = None;

        let guess = guess.into();
        let algorithm = self.algorithm;
        if guess.count() != algorithm.guess_count() {
            return Err(MethodError::GuessCount {
                algorithm,
                expected: algorithm.guess_count(),
                got: guess.count(),
            }.into());
        }
        if let Some(&callback) = algorithm.required_callbacks().iter().find(|&&c| !equation.has(c)) {
            return Err(MethodError::MissingCallback { algorithm, callback }.into());
        }

        debug!(%algorithm, ?guess, "computing root");
        let report = dispatch(algorithm, equation, guess, self.config)?;

        self.iteration_count = report.iterations;
        self.last_relative_error = report.last_error;
        Ok(report)
    }
}


fn dispatch(
    algorithm: Algorithm,
    equation: Equation<'_>,
    guess: Guess,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError> {
    let Equation { f, df, d2f } = equation;
    let missing = |callback| MethodError::MissingCallback { algorithm, callback };

    match (algorithm, guess) {
        (Algorithm::Bracket(BracketFamily::Bisection), Guess::Pair(a, b)) => {
            bisection(f, a, b, cfg)
        }
        (Algorithm::Bracket(BracketFamily::FalsePosition), Guess::Pair(a, b)) => {
            false_position(f, a, b, cfg)
        }
        (Algorithm::Open(OpenFamily::FixedPoint), Guess::Single(x0)) => {
            fixed_point(f, x0, cfg)
        }
        (Algorithm::Open(OpenFamily::Secant), Guess::Pair(x0, x1)) => {
            secant(f, x0, x1, cfg)
        }
        (Algorithm::Open(OpenFamily::NewtonRaphson), Guess::Single(x0)) => {
            let df = df.ok_or_else(|| missing(Callback::Df))?;
            newton_raphson(f, df, x0, cfg)
        }
        (Algorithm::Open(OpenFamily::NewtonRaphson2), Guess::Single(x0)) => {
            let df  = df.ok_or_else(|| missing(Callback::Df))?;
            let d2f = d2f.ok_or_else(|| missing(Callback::D2f))?;
            newton_raphson2(f, df, d2f, x0, cfg)
        }
        (Algorithm::Open(OpenFamily::RalstonRabinowitz), Guess::Pair(x0, x1)) => {
            let df = df.ok_or_else(|| missing(Callback::Df))?;
            ralston_rabinowitz(f, df, x0, x1, cfg)
        }
        (_, guess) => Err(MethodError::GuessCount {
            algorithm,
            expected: algorithm.guess_count(),
            got: guess.count(),
        }.into()),
    }
}

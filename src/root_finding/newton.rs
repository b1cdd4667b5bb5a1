//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::config::Config;
use super::engine::{iterate, Step, UpdateRule};
use super::equation::{evaluate, validate_at, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::NewtonRaphson);


struct NewtonRule<F, G> {
    func:  F,
    dfunc: G,
    x:     f64,
}

impl<F, G> UpdateRule for NewtonRule<F, G>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    fn current(&self) -> f64 {
        self.x
    }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let x   = self.x;
        let fx  = evaluate(&mut self.func, Callback::F, x, evals)?;
        let dfx = evaluate(&mut self.dfunc, Callback::Df, x, evals)?;

        if dfx == 0.0 {
            return Err(RootFindingError::DivisionByZero { algorithm: ALGORITHM, x });
        }

        Ok(Step::estimate(x - fx / dfx))
    }

    fn advance(&mut self, x_next: f64) {
        self.x = x_next;
    }

    fn stencil(&self) -> Stencil {
        Stencil::singleton(self.x)
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative `f'(x)`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`Config`]
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`        : approximate root
/// - `iterations`  : iterations performed, at most `max_iteration - 1`
/// - `evaluations` : total evaluations of `f` and `f'`
/// - `stencil`     : the guess the final step was taken from
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]          : `x0` non-finite
/// - [`RootFindingError::InvalidFunctionResult`] : `f(x)` or `f'(x)` produced NaN/inf
/// - [`RootFindingError::DivisionByZero`]        : `f'(x) == 0`
/// - [`RootFindingError::NonFiniteEstimate`]     : `x - f/f'` overflowed
/// - [`RootFindingError::DivergentIteration`]    : relative errors trending upwards
///
/// # Notes
/// - Quadratic convergence near simple roots; local only. Poor guesses or
///   ill-behaved functions can diverge or cycle. For guaranteed convergence
///   use a **bracketed method** (e.g. bisection)
pub fn newton_raphson<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    cfg.validate()?;

    let mut evals = 0;
    validate_at(&mut func, Callback::F, &[x0], &mut evals)?;
    validate_at(&mut dfunc, Callback::Df, &[x0], &mut evals)?;

    iterate(ALGORITHM, NewtonRule { func, dfunc, x: x0 }, &cfg, evals)
}

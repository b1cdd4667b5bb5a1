//! Newton-Raphson with second derivative, for multiple roots.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::Config;
use super::engine::{iterate, Step, UpdateRule};
use super::equation::{evaluate, validate_at, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::NewtonRaphson2);


struct Newton2Rule<F, G, H> {
    func:   F,
    dfunc:  G,
    d2func: H,
    x:      f64,
}

impl<F, G, H> UpdateRule for Newton2Rule<F, G, H>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64,
{
    fn current(&self) -> f64 {
        self.x
    }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let x    = self.x;
        let fx   = evaluate(&mut self.func, Callback::F, x, evals)?;
        let dfx  = evaluate(&mut self.dfunc, Callback::Df, x, evals)?;
        let d2fx = evaluate(&mut self.d2func, Callback::D2f, x, evals)?;

        let denom = dfx * dfx - fx * d2fx;
        if denom == 0.0 {
            return Err(RootFindingError::DivisionByZero { algorithm: ALGORITHM, x });
        }

        Ok(Step::estimate(x - fx * dfx / denom))
    }

    fn advance(&mut self, x_next: f64) {
        self.x = x_next;
    }

    fn stencil(&self) -> Stencil {
        Stencil::singleton(self.x)
    }
}


/// Finds a root with the modified Newton-Raphson update
///
/// `x_{k+1} = x_k - f f' / (f'² - f f'')`
///
/// which is Newton's method applied to `u = f / f'`. Unlike plain
/// Newton-Raphson it keeps quadratic convergence at multiple roots.
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]          : `x0` non-finite
/// - [`RootFindingError::InvalidFunctionResult`] : `f`, `f'` or `f''` produced NaN/inf
/// - [`RootFindingError::DivisionByZero`]        : `f'² - f f'' == 0`
/// - [`RootFindingError::DivergentIteration`]    : relative errors trending upwards
pub fn newton_raphson2<F, G, H>(
    mut func: F,
    mut dfunc: G,
    mut d2func: H,
    x0: f64,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64,
{
    cfg.validate()?;

    let mut evals = 0;
    validate_at(&mut func, Callback::F, &[x0], &mut evals)?;
    validate_at(&mut dfunc, Callback::Df, &[x0], &mut evals)?;
    validate_at(&mut d2func, Callback::D2f, &[x0], &mut evals)?;

    iterate(ALGORITHM, Newton2Rule { func, dfunc, d2func, x: x0 }, &cfg, evals)
}

use super::algorithms::{Algorithm, OpenFamily};
use super::config::Config;
use super::engine::{iterate, Step, UpdateRule};
use super::equation::{evaluate, validate_at, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);


struct FixedPointRule<G> {
    g: G,
    x: f64,
}

impl<G> UpdateRule for FixedPointRule<G>
where G: FnMut(f64) -> f64 {
    fn current(&self) -> f64 { self.x }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let x_next = evaluate(&mut self.g, Callback::G, self.x, evals)?;
        Ok(Step::estimate(x_next))
    }

    fn advance(&mut self, x_next: f64) { self.x = x_next; }

    fn stencil(&self) -> Stencil { Stencil::singleton(self.x) }
}


/// Finds a fixed point `x = g(x)` by direct iteration `x_{k+1} = g(x_k)`.
///
/// `g` is a rearrangement of `f(x) = 0`, e.g. `x² - x - 2 = 0` as
/// `g(x) = sqrt(x + 2)`. Converges when `|g'| < 1` near the fixed point.
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]          : `x0` non-finite
/// - [`RootFindingError::InvalidFunctionResult`] : `g` produced NaN/inf
/// - [`RootFindingError::DivergentIteration`]    : relative errors trending upwards
pub fn fixed_point<G>(
    mut g: G,
    x0: f64,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError>
where G: FnMut(f64) -> f64 {
    cfg.validate()?;

    let mut evals = 0;
    validate_at(&mut g, Callback::G, &[x0], &mut evals)?;

    iterate(ALGORITHM, FixedPointRule { g, x: x0 }, &cfg, evals)
}

use super::algorithms::{Algorithm, OpenFamily};
use super::config::Config;
use super::engine::{iterate, Step, UpdateRule};
use super::equation::{check_guess, evaluate, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};
use super::secant::calculate_secant_x_intercept;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::RalstonRabinowitz);


/// `u(x) = f(x) / f'(x)`, which has only simple roots wherever `f` has roots.
#[inline]
fn ratio<F, G>(
    func: &mut F,
    dfunc: &mut G,
    x: f64,
    evals: &mut usize,
) -> Result<f64, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let fx  = evaluate(func, Callback::F, x, evals)?;
    let dfx = evaluate(dfunc, Callback::Df, x, evals)?;
    if dfx == 0.0 {
        return Err(RootFindingError::DivisionByZero { algorithm: ALGORITHM, x });
    }
    Ok(fx / dfx)
}


struct RalstonRabinowitzRule<F, G> {
    func:  F,
    dfunc: G,
    x0:    f64,
    u0:    f64,
    x1:    f64,
    /// `u(x1)`, `None` until the next step needs it
    u1:    Option<f64>,
}

impl<F, G> UpdateRule for RalstonRabinowitzRule<F, G>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    fn current(&self) -> f64 {
        self.x1
    }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let u1 = match self.u1 {
            Some(u1) => u1,
            None => *self.u1.insert(ratio(&mut self.func, &mut self.dfunc, self.x1, evals)?),
        };
        let x_next = calculate_secant_x_intercept((self.x0, self.u0), (self.x1, u1))
            .ok_or(RootFindingError::DivisionByZero { algorithm: ALGORITHM, x: self.x1 })?;
        Ok(Step::estimate(x_next))
    }

    fn advance(&mut self, x_next: f64) {
        if let Some(u1) = self.u1.take() {
            self.u0 = u1;
        }
        self.x0 = self.x1;
        self.x1 = x_next;
    }

    fn stencil(&self) -> Stencil {
        Stencil::doubleton(self.x0, self.x1)
    }
}


/// Finds a root with the Ralston-Rabinowitz method: the secant update applied
/// to `u(x) = f(x) / f'(x)` instead of `f(x)`.
///
/// `u` turns multiple roots of `f` into simple ones, so the method keeps
/// superlinear convergence at double roots where plain secant slows down.
///
/// # Arguments
/// - `func`  : `f(x)`
/// - `dfunc` : `f'(x)`
/// - `x0`    : first guess, `x_{k-1}`
/// - `x1`    : second guess, `x_k`
/// - `cfg`   : [`Config`]
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]          : `x0` or `x1` is NaN/inf
/// - [`RootFindingError::InvalidFunctionResult`] : `f` or `f'` produced NaN/inf
/// - [`RootFindingError::DivisionByZero`]        : `f'(x) == 0` or `u(x_{k-1}) == u(x_k)`
/// - [`RootFindingError::DivergentIteration`]    : relative errors trending upwards
pub fn ralston_rabinowitz<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    x1: f64,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    cfg.validate()?;

    let mut evals = 0;
    let u0 = ratio(&mut func, &mut dfunc, check_guess(x0)?, &mut evals)?;
    let u1 = ratio(&mut func, &mut dfunc, check_guess(x1)?, &mut evals)?;

    let rule = RalstonRabinowitzRule { func, dfunc, x0, u0, x1, u1: Some(u1) };
    iterate(ALGORITHM, rule, &cfg, evals)
}

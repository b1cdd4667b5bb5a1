use super::algorithms::{Algorithm, OpenFamily};
use super::config::Config;
use super::engine::{iterate, Step, UpdateRule};
use super::equation::{check_guess, evaluate, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// `x1 - fx1 * (x0 - x1) / (fx0 - fx1)`
///
/// Shared with Ralston-Rabinowitz, which passes `u = f / f'` in place of `f`.
///
/// # Returns
/// - `None` if the denominator `fx0 - fx1` is exactly zero
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Option<f64> {
    let denom = fx0 - fx1;
    if denom == 0.0 {
        return None;
    }
    Some(x1 - fx1 * (x0 - x1) / denom)
}


struct SecantRule<F> {
    func: F,
    x0:   f64,
    f0:   f64,
    x1:   f64,
    /// `f(x1)`, `None` until the next step needs it
    f1:   Option<f64>,
}

impl<F> UpdateRule for SecantRule<F>
where F: FnMut(f64) -> f64 {
    fn current(&self) -> f64 {
        self.x1
    }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let f1 = match self.f1 {
            Some(f1) => f1,
            None => *self.f1.insert(evaluate(&mut self.func, Callback::F, self.x1, evals)?),
        };
        let x_next = calculate_secant_x_intercept((self.x0, self.f0), (self.x1, f1))
            .ok_or(RootFindingError::DivisionByZero { algorithm: ALGORITHM, x: self.x1 })?;
        Ok(Step::estimate(x_next))
    }

    fn advance(&mut self, x_next: f64) {
        if let Some(f1) = self.f1.take() {
            self.f0 = f1;
        }
        self.x0 = self.x1;
        self.x1 = x_next;
    }

    fn stencil(&self) -> Stencil {
        Stencil::doubleton(self.x0, self.x1)
    }
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess, `x_{k-1}`
/// - `x1`   : Second initial guess, `x_k`
/// - `cfg`  : [`Config`]
///
/// # Behavior
/// - Update: `x_{k+1} = x_k - f(x_k) * (x_{k-1} - x_k) / (f(x_{k-1}) - f(x_k))`
/// - Relative error: `|(x_{k+1} - x_k) / x_{k+1}|`
/// - Stencil: the pair `{x_{k-1}, x_k}` when the loop stopped
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]          : `x0` or `x1` is NaN/inf
/// - [`RootFindingError::InvalidFunctionResult`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::DivisionByZero`]        : `f(x_{k-1}) == f(x_k)`
/// - [`RootFindingError::DivergentIteration`]    : relative errors trending upwards
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    cfg.validate()?;

    let mut evals = 0;
    let f0 = evaluate(&mut func, Callback::F, check_guess(x0)?, &mut evals)?;
    let f1 = evaluate(&mut func, Callback::F, check_guess(x1)?, &mut evals)?;

    let rule = SecantRule { func, x0, f0, x1, f1: Some(f1) };
    iterate(ALGORITHM, rule, &cfg, evals)
}

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{open_bracket, Bracket, BracketStart};
use super::config::Config;
use super::engine::{immediate, iterate, Step, UpdateRule};
use super::equation::{evaluate, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


struct BisectionRule<F> {
    func:     F,
    bracket:  Bracket,
    estimate: f64,
}

impl<F> UpdateRule for BisectionRule<F>
where F: FnMut(f64) -> f64 {
    fn current(&self) -> f64 {
        self.estimate
    }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let midpoint = calculate_bisection(self.bracket.a, self.bracket.b);
        let fm = evaluate(&mut self.func, Callback::F, midpoint, evals)?;
        if fm == 0.0 {
            return Ok(Step { x_next: midpoint, exact: true });
        }

        self.bracket.narrow(midpoint, fm);
        Ok(Step::estimate(midpoint))
    }

    fn advance(&mut self, x_next: f64) {
        self.estimate = x_next;
    }

    fn stencil(&self) -> Stencil {
        Stencil::Bracket { bounds: self.bracket.bounds() }
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One bracket endpoint. Must be finite.
/// ├ `b`    - The other endpoint. Must be finite and differ from `a`; either order works.
/// └ `cfg`  - [`Config`] with `max_iteration`, `err_tolerance` and `divergent_skip`.
///
/// # Returns
///
/// A [`RootFindingReport`] whose stencil is the final bracket. The relative
/// error of iteration `k` compares midpoint `k` with midpoint `k - 1`; the
/// first midpoint is compared with `b`.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBracket`]        - `a` or `b` is NaN/inf or `a == b`.
/// ├ [`RootFindingError::NoSignChange`]          - `func(a)` and `func(b)` share a sign.
/// ├ [`RootFindingError::InvalidFunctionResult`] - `func(x)` produced NaN or inf.
/// ├ [`RootFindingError::DivergentIteration`]    - relative errors trending upwards.
/// └ [`RootFindingError::Config`]                - invalid `cfg`.
///
/// # Notes
/// └ If `func(a)` or `func(b)` is exactly zero that endpoint is returned
///   with zero iterations.
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: Config,
) -> Result<RootFindingReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    cfg.validate()?;

    let mut evals = 0;
    let bracket = match open_bracket(&mut func, a, b, &mut evals)? {
        BracketStart::Ready(bracket) => bracket,
        BracketStart::ExactRoot(root) => {
            return Ok(immediate(ALGORITHM, root, evals, Stencil::Bracket { bounds: [a, b] }));
        }
    };

    let rule = BisectionRule { func, bracket, estimate: b };
    iterate(ALGORITHM, rule, &cfg, evals)
}

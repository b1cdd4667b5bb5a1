use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{open_bracket, Bracket, BracketStart};
use super::config::Config;
use super::engine::{immediate, iterate, Step, UpdateRule};
use super::equation::{evaluate, Callback};
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);


/// Calculates the secant intersection point for the line
/// connecting `(a, fa)` and `(b, fb)`
///
/// # Returns
/// - `Some(x)` : `b - fb * (a - b) / (fa - fb)`
/// - `None`    : `fa == fb`, the chord is horizontal
///
/// A bracket from `open_bracket` has `fa`, `fb` of opposite sign and both
/// nonzero, so `None` is only reachable for hand-built brackets.
#[inline]
fn calculate_false_position(bracket: &Bracket) -> Option<f64> {
    let Bracket { a, fa, b, fb } = *bracket;
    let denom = fa - fb;
    if denom == 0.0 {
        return None;
    }
    Some(b - fb * (a - b) / denom)
}


struct FalsePositionRule<F> {
    func:     F,
    bracket:  Bracket,
    estimate: f64,
}

impl<F> UpdateRule for FalsePositionRule<F>
where F: FnMut(f64) -> f64 {
    fn current(&self) -> f64 {
        self.estimate
    }

    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError> {
        let x_next = calculate_false_position(&self.bracket)
            .ok_or(RootFindingError::DivisionByZero { algorithm: ALGORITHM, x: self.bracket.b })?;
        if !x_next.is_finite() {
            // reported by the engine
            return Ok(Step::estimate(x_next));
        }

        let fx = evaluate(&mut self.func, Callback::F, x_next, evals)?;
        if fx == 0.0 {
            return Ok(Step { x_next, exact: true });
        }

        self.bracket.narrow(x_next, fx);
        Ok(Step::estimate(x_next))
    }

    fn advance(&mut self, x_next: f64) {
        self.estimate = x_next;
    }

    fn stencil(&self) -> Stencil {
        Stencil::Bracket { bounds: self.bracket.bounds() }
    }
}


/// Finds a root using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi)
/// (regula falsi, unmodified).
///
/// Each estimate is the x-intercept of the chord through the bracket
/// endpoints; the endpoint whose function value shares the estimate's sign
/// is replaced, so the root stays bracketed.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : one bracket endpoint
/// - `b`    : other bracket endpoint, either order
/// - `cfg`  : [`Config`]
///
/// # Errors
/// - [`RootFindingError::InvalidBracket`]        : endpoint non-finite or `a == b`
/// - [`RootFindingError::NoSignChange`]          : `f(a)`, `f(b)` share a sign
/// - [`RootFindingError::InvalidFunctionResult`] : `f` produced NaN/inf
/// - [`RootFindingError::DivergentIteration`]    : relative errors trending upwards
///
/// # Notes
/// - For convex or concave `f` one endpoint stays fixed and convergence is
///   linear; the relative-error criterion can stop while the true error is
///   still a few times `err_tolerance`.
pub fn false_position<F>(
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

    let rule = FalsePositionRule { func, bracket, estimate: b };
    iterate(ALGORITHM, rule, &cfg, evals)
}

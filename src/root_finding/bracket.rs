//! Bracket bookkeeping shared by bisection and false position.
//!
//! - `opposite_sign` : `true` if values have opposite sign
//! - [`Bracket`]     : endpoints and their function values, narrowed by sign test
//! - `open_bracket`  : validates `[a, b]` before the loop

use super::equation::{evaluate, Callback};
use super::errors::RootFindingError;


/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Interval `[a, b]` with `f(a)` and `f(b)` of opposite sign.
///
/// Endpoints keep the caller's order, so `a > b` is allowed.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Bracket {
    pub a:  f64,
    pub fa: f64,
    pub b:  f64,
    pub fb: f64,
}

impl Bracket {
    /// Replaces the endpoint whose function value shares the sign of `fx`.
    pub fn narrow(&mut self, x: f64, fx: f64) {
        if opposite_sign(self.fa, fx) {
            self.b  = x;
            self.fb = fx;
        } else {
            self.a  = x;
            self.fa = fx;
        }
    }

    pub fn bounds(&self) -> [f64; 2] {
        [self.a, self.b]
    }
}


pub(crate) enum BracketStart {
    Ready(Bracket),
    /// one endpoint is already an exact root
    ExactRoot(f64),
}

/// Evaluates `f` at both endpoints and checks for a sign change.
///
/// # Errors
/// - [`RootFindingError::InvalidBracket`]        : endpoint non-finite or `a == b`
/// - [`RootFindingError::InvalidFunctionResult`] : `f` non-finite at an endpoint
/// - [`RootFindingError::NoSignChange`]          : `f(a)` and `f(b)` share a sign
pub(crate) fn open_bracket<F>(
    func: &mut F,
    a: f64,
    b: f64,
    evals: &mut usize,
) -> Result<BracketStart, RootFindingError>
where F: FnMut(f64) -> f64 {
    if !(a.is_finite() && b.is_finite()) || a == b {
        return Err(RootFindingError::InvalidBracket { a, b });
    }

    let fa = evaluate(func, Callback::F, a, evals)?;
    if fa == 0.0 {
        return Ok(BracketStart::ExactRoot(a));
    }
    let fb = evaluate(func, Callback::F, b, evals)?;
    if fb == 0.0 {
        return Ok(BracketStart::ExactRoot(b));
    }

    if !opposite_sign(fa, fb) {
        return Err(RootFindingError::NoSignChange { a, b, fa, fb });
    }

    Ok(BracketStart::Ready(Bracket { a, fa, b, fb }))
}

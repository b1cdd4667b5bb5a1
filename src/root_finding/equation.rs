//! Equation callbacks and their evaluation.
//!
//! - [`Callback`] : which of the caller's functions is being evaluated
//! - `evaluate`   : calls a callback and rejects NaN / inf results
//! - [`Equation`] : bundle of callbacks handed to [`RootFinder::compute`]
//!
//! [`RootFinder::compute`]: super::method::RootFinder::compute

use super::errors::RootFindingError;


/// Identifies a caller-supplied function in errors and requirements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Callback {
    /// `f(x)`
    F,
    /// `f'(x)`
    Df,
    /// `f''(x)`
    D2f,
    /// `g(x)`, the fixed-point rearrangement of `f(x) = 0`
    G,
}
impl std::fmt::Display for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Callback::F   => "f(x)",
            Callback::Df  => "f'(x)",
            Callback::D2f => "f''(x)",
            Callback::G   => "g(x)",
        };
        write!(f, "{label}")
    }
}


/// Evaluates `func` at `x`, counting the call in `evals`.
///
/// # Errors
/// - [`RootFindingError::InvalidFunctionResult`] if the value is NaN or infinite.
#[inline]
pub(crate) fn evaluate<F>(
    func: &mut F,
    callback: Callback,
    x: f64,
    evals: &mut usize,
) -> Result<f64, RootFindingError>
where F: FnMut(f64) -> f64 {
    let value = { *evals += 1; func(x) };
    if !value.is_finite() {
        return Err(RootFindingError::InvalidFunctionResult { callback, x, value });
    }

    Ok(value)
}

#[inline]
pub(crate) fn check_guess(x: f64) -> Result<f64, RootFindingError> {
    if !x.is_finite() {
        return Err(RootFindingError::InvalidGuess { x });
    }
    Ok(x)
}

/// Precondition check run before the iteration loop: every guess must be
/// finite and `func` must produce a finite value at each of them.
pub(crate) fn validate_at<F>(
    func: &mut F,
    callback: Callback,
    guesses: &[f64],
    evals: &mut usize,
) -> Result<(), RootFindingError>
where F: FnMut(f64) -> f64 {
    for &x in guesses {
        evaluate(func, callback, check_guess(x)?, evals)?;
    }
    Ok(())
}


pub(crate) type BoxedFn<'a> = Box<dyn FnMut(f64) -> f64 + 'a>;

/// Callbacks for one equation.
///
/// `f` is the primary function. For [`OpenFamily::FixedPoint`] it is read as
/// the rearrangement `g(x)` and iterated directly. Derivatives are only
/// required by the Newton-type methods.
///
/// [`OpenFamily::FixedPoint`]: super::algorithms::OpenFamily::FixedPoint
pub struct Equation<'a> {
    pub(crate) f:   BoxedFn<'a>,
    pub(crate) df:  Option<BoxedFn<'a>>,
    pub(crate) d2f: Option<BoxedFn<'a>>,
}

impl<'a> Equation<'a> {
    pub fn new(f: impl FnMut(f64) -> f64 + 'a) -> Self {
        Self { f: Box::new(f), df: None, d2f: None }
    }

    #[must_use]
    pub fn with_derivative(mut self, df: impl FnMut(f64) -> f64 + 'a) -> Self {
        self.df = Some(Box::new(df));
        self
    }

    #[must_use]
    pub fn with_second_derivative(mut self, d2f: impl FnMut(f64) -> f64 + 'a) -> Self {
        self.d2f = Some(Box::new(d2f));
        self
    }

    /// Whether a callback of the given kind was supplied.
    pub fn has(&self, callback: Callback) -> bool {
        match callback {
            Callback::F | Callback::G => true,
            Callback::Df              => self.df.is_some(),
            Callback::D2f             => self.d2f.is_some(),
        }
    }
}

impl std::fmt::Debug for Equation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Equation")
            .field("df", &self.df.is_some())
            .field("d2f", &self.d2f.is_some())
            .finish_non_exhaustive()
    }
}

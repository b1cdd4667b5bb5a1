//! Root-finding error types.
//!
//! ┌ [`MethodError`]      : method selection and call-shape misuse
//! │  ├ unknown method name
//! │  ├ missing derivative callback
//! │  └ wrong number of initial guesses
//! │
//! ├ [`ConfigError`]      : invalid configuration values
//! │
//! └ [`RootFindingError`] : everything that aborts a `compute` call
//!     ├ invalid callback result (NaN / inf)
//!     ├ invalid guesses or bracket
//!     ├ division by zero in an update formula
//!     └ divergent iteration


use thiserror::Error;
use super::algorithms::Algorithm;
use super::equation::Callback;
use super::convergence::DIVERGENCE_WINDOW;


/// Method selection errors.
#[derive(Debug, Error)]
pub enum MethodError {
    #[error("unknown root-finding method: `{name}`")]
    UnknownMethod { name: String },

    #[error("{algorithm} requires a {callback} callback")]
    MissingCallback { algorithm: Algorithm, callback: Callback },

    #[error("{algorithm} takes {expected} initial guess(es), got {got}")]
    GuessCount { algorithm: Algorithm, expected: usize, got: usize },
}


/// Configuration errors.
///
/// ┌ `max_iteration` must be >= 1
/// └ `err_tolerance` must be finite and > 0
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `max_iteration`: must be >= 1. got {got}")]
    InvalidMaxIteration { got: usize },

    #[error("invalid `err_tolerance`: must be finite and > 0. got {got}")]
    InvalidErrTolerance { got: f64 },
}


/// Errors that abort a root-finding computation.
///
/// None of these are retried internally; retrying with a different
/// guess or bracket is up to the caller.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Method(#[from] MethodError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{callback} returned a non-finite value at x={x}: {value}")]
    InvalidFunctionResult { callback: Callback, x: f64, value: f64 },

    #[error("invalid initial guess: x={x} must be finite")]
    InvalidGuess { x: f64 },

    #[error("invalid bracket [{a}, {b}]: endpoints must be finite and distinct")]
    InvalidBracket { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("division by zero in {algorithm} update at x={x}")]
    DivisionByZero { algorithm: Algorithm, x: f64 },

    #[error("{algorithm} produced a non-finite estimate at iteration {iteration}: {x}")]
    NonFiniteEstimate { algorithm: Algorithm, iteration: usize, x: f64 },

    #[error("divergent rows detected at iteration {iteration}: relative errors {errors:?}")]
    DivergentIteration { iteration: usize, errors: [f64; DIVERGENCE_WINDOW] },
}

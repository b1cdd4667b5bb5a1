//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and the static [`METHOD_NAMES`] table used to select a method by name.

use std::str::FromStr;

use super::equation::Callback;
use super::errors::MethodError;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenFamily {
    FixedPoint,
    Secant,
    NewtonRaphson,
    NewtonRaphson2,
    RalstonRabinowitz,
}


/// How `max_iteration` bounds the iteration index.
///
/// - [`IterationBound::Inclusive`] : `1..=max_iteration`
/// - [`IterationBound::Exclusive`] : `1..max_iteration`, i.e. one fewer iteration
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationBound {
    Inclusive,
    Exclusive,
}
impl IterationBound {
    /// Index of the last iteration the loop may run for a given `max_iteration`.
    pub const fn last_iteration(self, max_iteration: usize) -> usize {
        match self {
            IterationBound::Inclusive => max_iteration,
            IterationBound::Exclusive => max_iteration.saturating_sub(1),
        }
    }
}


/// Registered method names. Lookup keys are normalized by [`normalize_name`]
/// before matching, so `"Newton-Raphson"` and `"newton_raphson"` both hit
/// `"newtonraphson"`.
pub const METHOD_NAMES: &[(&str, Algorithm)] = &[
    ("bisection",         Algorithm::Bracket(BracketFamily::Bisection)),
    ("falseposition",     Algorithm::Bracket(BracketFamily::FalsePosition)),
    ("regulafalsi",       Algorithm::Bracket(BracketFamily::FalsePosition)),
    ("fixedpoint",        Algorithm::Open(OpenFamily::FixedPoint)),
    ("secant",            Algorithm::Open(OpenFamily::Secant)),
    ("newtonraphson",     Algorithm::Open(OpenFamily::NewtonRaphson)),
    ("newton",            Algorithm::Open(OpenFamily::NewtonRaphson)),
    ("newtonraphson2",    Algorithm::Open(OpenFamily::NewtonRaphson2)),
    ("ralstonrabinowitz", Algorithm::Open(OpenFamily::RalstonRabinowitz)),
];

/// Every algorithm, in registration order.
pub const ALL_ALGORITHMS: [Algorithm; 7] = [
    Algorithm::Bracket(BracketFamily::Bisection),
    Algorithm::Bracket(BracketFamily::FalsePosition),
    Algorithm::Open(OpenFamily::FixedPoint),
    Algorithm::Open(OpenFamily::Secant),
    Algorithm::Open(OpenFamily::NewtonRaphson),
    Algorithm::Open(OpenFamily::NewtonRaphson2),
    Algorithm::Open(OpenFamily::RalstonRabinowitz),
];


/// Trims, lower-cases and strips `_`, `-` and whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}


impl Algorithm {
    /// Looks up a method by name in [`METHOD_NAMES`].
    ///
    /// # Errors
    /// - [`MethodError::UnknownMethod`] if the normalized name is not registered.
    pub fn from_name(name: &str) -> Result<Self, MethodError> {
        let key = normalize_name(name);
        METHOD_NAMES
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|&(_, algorithm)| algorithm)
            .ok_or_else(|| MethodError::UnknownMethod { name: name.to_string() })
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)       => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition)   => "false_position",
            Algorithm::Open(OpenFamily::FixedPoint)            => "fixed_point",
            Algorithm::Open(OpenFamily::Secant)                => "secant",
            Algorithm::Open(OpenFamily::NewtonRaphson)         => "newton_raphson",
            Algorithm::Open(OpenFamily::NewtonRaphson2)        => "newton_raphson2",
            Algorithm::Open(OpenFamily::RalstonRabinowitz)     => "ralston_rabinowitz",
        }
    }

    /// Loop bound used by each method.
    ///
    /// The single-point open methods stop one short of `max_iteration`;
    /// the bracketing and two-point methods run it in full.
    pub const fn iteration_bound(self) -> IterationBound {
        match self {
            Algorithm::Bracket(..)
            | Algorithm::Open(OpenFamily::Secant)
            | Algorithm::Open(OpenFamily::RalstonRabinowitz) => IterationBound::Inclusive,

            Algorithm::Open(OpenFamily::FixedPoint)
            | Algorithm::Open(OpenFamily::NewtonRaphson)
            | Algorithm::Open(OpenFamily::NewtonRaphson2)    => IterationBound::Exclusive,
        }
    }

    /// Number of initial guesses (or bracket endpoints) `compute` expects.
    pub const fn guess_count(self) -> usize {
        match self {
            Algorithm::Bracket(..)
            | Algorithm::Open(OpenFamily::Secant)
            | Algorithm::Open(OpenFamily::RalstonRabinowitz) => 2,
            Algorithm::Open(..)                              => 1,
        }
    }

    /// Callbacks the update formula evaluates.
    pub const fn required_callbacks(self) -> &'static [Callback] {
        match self {
            Algorithm::Bracket(..)
            | Algorithm::Open(OpenFamily::Secant)            => &[Callback::F],
            Algorithm::Open(OpenFamily::FixedPoint)          => &[Callback::G],
            Algorithm::Open(OpenFamily::NewtonRaphson)
            | Algorithm::Open(OpenFamily::RalstonRabinowitz) => &[Callback::F, Callback::Df],
            Algorithm::Open(OpenFamily::NewtonRaphson2)      => &[Callback::F, Callback::Df, Callback::D2f],
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
impl FromStr for Algorithm {
    type Err = MethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}

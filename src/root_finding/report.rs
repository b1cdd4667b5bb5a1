//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Reasons a root-finding algorithm may terminate without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// relative error `<= err_tolerance`
    ToleranceReached,
    /// the update produced exactly `0.0`, which is taken as the root
    ZeroEstimate,
    /// `f(x) == 0` exactly at a bracket endpoint or bracketing estimate
    ExactRoot,
    /// `max_iteration` exhausted; the root is the last estimate
    IterationLimit,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval, in the caller's endpoint order
/// - [`Stencil::Open`]    : open methods
///     - `x` = current guess(es) when the loop stopped
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x0: f64, x1: f64) -> Self {
        Stencil::Open { x: [x0, x1], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`            : root estimate (the last estimate on [`TerminationReason::IterationLimit`])
/// - `iterations`      : total iterations
/// - `evaluations`     : total callback evaluations, precondition checks included
/// - `last_error`      : relative error of the final iteration, `None` if none completed
/// - `relative_errors` : relative error of every completed iteration, in order
/// - `termination`     : why the solver stopped ([`TerminationReason`])
/// - `stencil`         : last set of points used in the update formula
/// - `algorithm_name`  : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootFindingReport {
    pub root            : f64,
    pub iterations      : usize,
    pub evaluations     : usize,
    pub last_error      : Option<f64>,
    pub relative_errors : Vec<f64>,
    pub termination     : TerminationReason,
    pub stencil         : Stencil,
    pub algorithm_name  : &'static str,
}

impl RootFindingReport {
    /// `true` unless the iteration limit was exhausted.
    pub fn converged(&self) -> bool {
        self.termination != TerminationReason::IterationLimit
    }
}

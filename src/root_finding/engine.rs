//! Shared iteration loop.
//!
//! Every method supplies an [`UpdateRule`]; [`iterate`] drives it:
//!
//! ┌ next estimate from the rule (degeneracy checks live in the rule)
//! ├ non-finite estimate         -> error
//! ├ estimate exactly 0          -> root is 0 ([`TerminationReason::ZeroEstimate`])
//! ├ relative error |(x_next - x) / x_next| appended to the history
//! ├ f(x_next) exactly 0         -> [`TerminationReason::ExactRoot`] (bracketing only)
//! ├ divergence + divergent_skip -> error
//! ├ error <= err_tolerance      -> root is x_next
//! └ advance the rule's guesses

use tracing::{debug, trace, warn};

use super::algorithms::Algorithm;
use super::config::Config;
use super::convergence::ErrorHistory;
use super::errors::RootFindingError;
use super::report::{RootFindingReport, Stencil, TerminationReason};


/// Outcome of one application of an update formula.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Step {
    pub x_next: f64,
    /// `f(x_next)` is exactly zero
    pub exact:  bool,
}
impl Step {
    pub fn estimate(x_next: f64) -> Self {
        Self { x_next, exact: false }
    }
}


/// Per-method update formula driven by [`iterate`].
pub(crate) trait UpdateRule {
    /// Estimate the next relative error is measured against.
    fn current(&self) -> f64;

    /// Evaluates the callbacks at the current guess(es) and applies the
    /// update formula.
    fn step(&mut self, evals: &mut usize) -> Result<Step, RootFindingError>;

    /// Shifts guesses forward after a non-terminal iteration.
    fn advance(&mut self, x_next: f64);

    fn stencil(&self) -> Stencil;
}


/// Report for a run that stops before the loop starts.
pub(crate) fn immediate(
    algorithm: Algorithm,
    root: f64,
    evaluations: usize,
    stencil: Stencil,
) -> RootFindingReport {
    debug!(%algorithm, root, "initial guess is an exact root");
    RootFindingReport {
        root,
        iterations      : 0,
        evaluations,
        last_error      : None,
        relative_errors : Vec::new(),
        termination     : TerminationReason::ExactRoot,
        stencil,
        algorithm_name  : algorithm.algorithm_name(),
    }
}


/// Runs `rule` until a stopping condition, an error or the iteration limit.
///
/// `evals` carries the evaluations already spent on precondition checks.
pub(crate) fn iterate<R: UpdateRule>(
    algorithm: Algorithm,
    mut rule: R,
    cfg: &Config,
    mut evals: usize,
) -> Result<RootFindingReport, RootFindingError> {
    let tolerance = cfg.err_tolerance();
    let last_iter = algorithm.iteration_bound().last_iteration(cfg.max_iteration());

    let mut history = ErrorHistory::new();
    let finish = |root: f64,
                  iterations: usize,
                  evaluations: usize,
                  termination: TerminationReason,
                  stencil: Stencil,
                  history: ErrorHistory| {
        RootFindingReport {
            root,
            iterations,
            evaluations,
            last_error      : history.last(),
            relative_errors : history.into_inner(),
            termination,
            stencil,
            algorithm_name  : algorithm.algorithm_name(),
        }
    };

    for iter in 1..=last_iter {
        let x = rule.current();
        let Step { x_next, exact } = rule.step(&mut evals)?;

        if !x_next.is_finite() {
            return Err(RootFindingError::NonFiniteEstimate { algorithm, iteration: iter, x: x_next });
        }

        if x_next == 0.0 {
            debug!(%algorithm, iteration = iter, "update landed exactly on zero");
            return Ok(finish(0.0, iter, evals, TerminationReason::ZeroEstimate, rule.stencil(), history));
        }

        let err = ((x_next - x) / x_next).abs();
        history.push(err);
        trace!(%algorithm, iteration = iter, x_next, err);

        if exact {
            debug!(%algorithm, iteration = iter, root = x_next, "exact root");
            return Ok(finish(x_next, iter, evals, TerminationReason::ExactRoot, rule.stencil(), history));
        }

        if cfg.divergent_skip() && history.is_divergent() {
            warn!(%algorithm, iteration = iter, "divergent rows detected");
            return Err(RootFindingError::DivergentIteration { iteration: iter, errors: history.tail() });
        }

        if err <= tolerance {
            debug!(%algorithm, iteration = iter, root = x_next, err, "tolerance reached");
            return Ok(finish(x_next, iter, evals, TerminationReason::ToleranceReached, rule.stencil(), history));
        }

        rule.advance(x_next);
    }

    warn!(%algorithm, max_iteration = cfg.max_iteration(), "iteration limit reached without convergence");
    Ok(finish(rule.current(), last_iter, evals, TerminationReason::IterationLimit, rule.stencil(), history))
}

//! Divergence detection over the relative-error history of a run.

/// Number of trailing relative errors inspected by [`is_divergent`].
pub const DIVERGENCE_WINDOW: usize = 3;


/// Returns `true` when the last [`DIVERGENCE_WINDOW`] errors are strictly
/// increasing, i.e. successive estimates are moving apart.
///
/// Always `false` while fewer than [`DIVERGENCE_WINDOW`] errors exist.
/// This is a heuristic: slowly converging runs may trip it and
/// oscillating divergent runs may not.
pub fn is_divergent(errors: &[f64]) -> bool {
    if errors.len() < DIVERGENCE_WINDOW {
        return false;
    }
    errors[errors.len() - DIVERGENCE_WINDOW..]
        .windows(2)
        .all(|pair| pair[0] < pair[1])
}


/// Append-only relative-error sequence owned by a single run.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorHistory {
    errors: Vec<f64>,
}

impl ErrorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: f64) {
        self.errors.push(err);
    }

    pub fn last(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    pub fn is_divergent(&self) -> bool {
        is_divergent(&self.errors)
    }

    /// The trailing window, padded with NaN when shorter.
    pub fn tail(&self) -> [f64; DIVERGENCE_WINDOW] {
        let mut out = [f64::NAN; DIVERGENCE_WINDOW];
        let start = self.errors.len().saturating_sub(DIVERGENCE_WINDOW);
        let offset = DIVERGENCE_WINDOW - (self.errors.len() - start);
        out[offset..].copy_from_slice(&self.errors[start..]);
        out
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.errors
    }
}

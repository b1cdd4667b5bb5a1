//! Shared configuration for root-finding algorithms.
//!
//! [`Config`] : universal fields
//! ├ `max_iteration`  : iteration cap
//! ├ `err_tolerance`  : relative-error stopping tolerance
//! └ `divergent_skip` : abort when the relative errors trend upwards
//!
//! [`Config::new`] initializes configuration with default values.
//! Setters validate their input and hand back the updated config.

use super::errors::ConfigError;


pub const DEFAULT_MAX_ITERATION  : usize = 50;
pub const DEFAULT_ERR_TOLERANCE  : f64   = 1e-9;
pub const DEFAULT_DIVERGENT_SKIP : bool  = true;


#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    max_iteration:  usize,
    err_tolerance:  f64,
    divergent_skip: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_iteration  : DEFAULT_MAX_ITERATION,
            err_tolerance  : DEFAULT_ERR_TOLERANCE,
            divergent_skip : DEFAULT_DIVERGENT_SKIP,
        }
    }

    // getters
    pub fn max_iteration(&self)  -> usize { self.max_iteration }
    pub fn err_tolerance(&self)  -> f64   { self.err_tolerance }
    pub fn divergent_skip(&self) -> bool  { self.divergent_skip }

    pub fn set_max_iteration(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIteration { got: v });
        }
        self.max_iteration = v;
        Ok(self)
    }

    pub fn set_err_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidErrTolerance { got: v });
        }
        self.err_tolerance = v;
        Ok(self)
    }

    #[must_use]
    pub fn set_divergent_skip(mut self, v: bool) -> Self {
        self.divergent_skip = v;
        self
    }

    /// Re-checks every field. Needed for configs that did not go through
    /// the setters, e.g. deserialized ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iteration == 0 {
            return Err(ConfigError::InvalidMaxIteration { got: self.max_iteration });
        }
        if !self.err_tolerance.is_finite() || self.err_tolerance <= 0.0 {
            return Err(ConfigError::InvalidErrTolerance { got: self.err_tolerance });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

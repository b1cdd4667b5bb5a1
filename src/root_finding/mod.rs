// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub mod equation;
pub mod convergence;
pub mod method;
pub(crate) mod bracket;
pub(crate) mod engine;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod secant;
pub mod newton;
pub mod newton2;
pub mod ralston_rabinowitz;

pub use algorithms::{Algorithm, BracketFamily, OpenFamily};
pub use config::Config;
pub use equation::{Callback, Equation};
pub use errors::{ConfigError, MethodError, RootFindingError};
pub use method::{create_method, Guess, RootFinder};
pub use report::{RootFindingReport, Stencil, TerminationReason};

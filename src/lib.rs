//! Classical iterative root finding for single-variable equations `f(x) = 0`.
//!
//! Seven methods share one iteration engine (see [`root_finding`]):
//! bisection, false position, fixed point, secant, Newton-Raphson,
//! Newton-Raphson with a second derivative, and Ralston-Rabinowitz.
//!
//! ```
//! use river::root_finding::{create_method, Equation};
//!
//! let mut finder = create_method("newton-raphson", None)?;
//! let report = finder.compute(
//!     Equation::new(|x: f64| x * x - 2.0).with_derivative(|x: f64| 2.0 * x),
//!     1.0,
//! )?;
//!
//! assert!((report.root - 2.0_f64.sqrt()).abs() < 1e-12);
//! assert_eq!(finder.iteration_count(), report.iterations);
//! # Ok::<(), river::root_finding::errors::RootFindingError>(())
//! ```

pub mod root_finding;

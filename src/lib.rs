#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! Simultaneous-iteration (Durand-Kerner / Weierstrass) polynomial root
//! solver.
//!
//! Every root estimate is refined at once: root `i` moves by the polynomial
//! value at estimate `i` divided by the product of its differences with all
//! other current estimates. One iteration is an embarrassingly parallel
//! fan-out over the root indices, and the crate ships three interchangeable
//! execution strategies for it: a single-threaded baseline, a work-stealing
//! bulk fan-out and a manually thread-partitioned one (see
//! [`solver::StrategyKind`]).
//!
//! The real part of every converged root is negated before it is returned;
//! the iteration operates on mirrored real components (see
//! [`solver::solve`]).
//!
//! ```
//! use durand_kerner::{solver, solver::Config, Poly};
//!
//! // x^2 + x - 1, coefficients in ascending degree order
//! let poly = Poly::new(&[-1.0, 1.0, 1.0])?;
//! let roots = solver::solve(&poly, &Config::default())?;
//!
//! // the golden ratio and its conjugate
//! let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
//! assert!(roots.iter().any(|r| (r.re - phi).abs() < 1e-6));
//! assert!(roots.iter().any(|r| (r.re - (1.0 - phi)).abs() < 1e-6));
//! # Ok::<(), durand_kerner::Error>(())
//! ```

mod error;
pub use error::{Error, Result};

mod poly;
pub use poly::Poly;

pub mod solver;

pub mod util;

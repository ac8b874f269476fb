//! The driver: initialize the root estimates, then repeat the simultaneous
//! Weierstrass step under a chosen execution strategy until every root has
//! settled or the iteration budget runs out.

use itertools::Itertools;
use num::complex::Complex64;
use num::Zero;

use crate::error::{Error, Result};
use crate::poly::Poly;

pub mod initial_guess;
pub mod strategy;

pub use strategy::{Strategy, StrategyKind};

/// Iteration budget used by [`Config::default`].
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Largest per-root displacement at which an iteration counts as converged,
/// used by [`Config::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Solver configuration.
///
/// All knobs are explicit so that the same settings can be replayed across
/// strategies.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which execution discipline runs the per-root fan-out.
    pub strategy: StrategyKind,
    /// Upper bound on worker threads used by the parallel strategies.
    pub max_parallelism: usize,
    /// Maximum number of simultaneous iterations before giving up.
    pub max_iterations: usize,
    /// Largest per-root displacement between consecutive iterations at
    /// which the solve is declared complete.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Sequential,
            max_parallelism: num_cpus::get(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<()> {
        if self.max_parallelism == 0 {
            return Err(Error::InvalidConfig {
                reason: "max_parallelism must be at least 1",
            });
        }
        if self.tolerance <= 0.0 || self.tolerance.is_nan() {
            return Err(Error::InvalidConfig {
                reason: "tolerance must be a positive number",
            });
        }
        Ok(())
    }
}

/// Find all roots of `poly`, starting from evenly spaced estimates on the
/// unit circle.
///
/// Degree-1 input is solved in closed form as `-c0/c1`, without running the
/// iteration. On convergence the real part of every root is negated before
/// being returned; the iteration solves for mirrored real components.
///
/// # Errors
/// - [`Error::InvalidConfig`] for a zero worker bound or a non-positive
///   tolerance
/// - [`Error::CoincidentRoots`] if two estimates collide during iteration
/// - [`Error::NoConverge`] if the budget is exhausted first
pub fn solve(poly: &Poly, config: &Config) -> Result<Vec<Complex64>> {
    config.validate()?;

    if poly.degree() == 1 {
        return Ok(vec![poly.linear_root()]);
    }

    let mut guesses = vec![Complex64::zero(); poly.degree()];
    initial_guess::unit_circle(&mut guesses);
    solve_from(poly, &guesses, config)
}

/// Like [`solve`], but starting from caller-supplied estimates, one per
/// root.
///
/// # Errors
/// Same as [`solve`].
///
/// # Panics
/// If the number of guesses does not match the degree of the polynomial.
pub fn solve_from(
    poly: &Poly,
    initial_guesses: &[Complex64],
    config: &Config,
) -> Result<Vec<Complex64>> {
    config.validate()?;
    assert_eq!(
        initial_guesses.len(),
        poly.degree(),
        "one initial guess per root is required"
    );

    if poly.degree() == 1 {
        return Ok(vec![poly.linear_root()]);
    }

    let strategy = config.strategy.build(config.max_parallelism)?;
    let mut roots = initial_guesses.to_vec();

    for iteration in 0..config.max_iterations {
        let next = strategy.step(poly, &roots)?;

        if strategy.converged(&roots, &next, config.tolerance) {
            log::debug!("converged after {} iterations", iteration + 1);
            return Ok(flip_real(next));
        }

        roots = next;
        log::trace!("{roots:?}");
    }

    Err(Error::NoConverge {
        iterations: config.max_iterations,
    })
}

/// The iteration's fixed points carry mirrored real components, so the sign
/// is inverted once before presentation.
fn flip_real(roots: Vec<Complex64>) -> Vec<Complex64> {
    roots
        .into_iter()
        .map(|z| Complex64::new(-z.re, z.im))
        .collect_vec()
}

//! Execution strategies for the per-root fan-out.
//!
//! One simultaneous iteration updates every root independently from the
//! same read-only snapshot of the previous estimates. The [`Strategy`]
//! trait captures exactly that capability: fan out the per-index
//! computations and reduce the results. The driver depends only on the
//! trait, so the three disciplines are interchangeable.

use num::complex::Complex64;

use crate::error::Result;
use crate::poly::Poly;

mod sequential;
pub use sequential::Sequential;
mod data_parallel;
pub use data_parallel::DataParallel;
mod thread_partitioned;
pub use thread_partitioned::ThreadPartitioned;

/// One execution discipline for the simultaneous update.
pub trait Strategy: Send + Sync {
    /// Compute the next root vector from a snapshot of the current one.
    ///
    /// Slot `i` of the result corresponds to root `i` of the input, and the
    /// snapshot is never mutated during the step.
    ///
    /// # Errors
    /// [`crate::Error::CoincidentRoots`] if a Weierstrass denominator is
    /// exactly zero; a fault in any worker surfaces here, first fault wins.
    fn step(&self, poly: &Poly, roots: &[Complex64]) -> Result<Vec<Complex64>>;

    /// True iff every root moved by at most `tolerance` between `before`
    /// and `after`.
    ///
    /// Each index yields its own verdict and the verdicts are folded with a
    /// logical AND; no verdict is ever written by two workers.
    fn converged(&self, before: &[Complex64], after: &[Complex64], tolerance: f64) -> bool;
}

/// Selects one of the built-in execution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Single-threaded loop, the correctness baseline.
    #[default]
    Sequential,
    /// Work-stealing bulk fan-out on a bounded rayon pool.
    DataParallel,
    /// Contiguous index chunks, one explicitly managed thread per chunk.
    ThreadPartitioned,
}

impl StrategyKind {
    /// Instantiate the strategy with the given worker bound.
    ///
    /// # Errors
    /// [`crate::Error::Other`] if a thread pool cannot be created.
    pub fn build(self, max_parallelism: usize) -> Result<Box<dyn Strategy>> {
        Ok(match self {
            Self::Sequential => Box::new(Sequential),
            Self::DataParallel => Box::new(DataParallel::new(max_parallelism)?),
            Self::ThreadPartitioned => Box::new(ThreadPartitioned::new(max_parallelism)),
        })
    }
}

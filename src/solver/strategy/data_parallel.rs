use num::complex::Complex64;
use num::{One, Zero};
use rayon::prelude::*;

use super::Strategy;
use crate::error::{Error, Result};
use crate::poly::Poly;

/// Bulk fan-out over the root indices on a work-stealing pool bounded by
/// the configured parallelism.
///
/// Every result lands at its own index, and the inner evaluation and
/// product reductions are parallelized the same way as the outer fan-out.
#[derive(Debug)]
pub struct DataParallel {
    pool: rayon::ThreadPool,
}

impl DataParallel {
    /// Build the strategy with its own pool of at most `max_parallelism`
    /// workers.
    ///
    /// # Errors
    /// [`Error::Other`] if the pool cannot be spawned.
    pub fn new(max_parallelism: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_parallelism.max(1))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create thread pool: {e}"))?;
        Ok(Self { pool })
    }
}

/// Term-wise polynomial evaluation, reduced across the pool.
fn eval(poly: &Poly, x: Complex64) -> Complex64 {
    poly.coeffs()
        .par_iter()
        .enumerate()
        .map(|(k, &c)| x.powu(k as u32) * c)
        .reduce(Complex64::zero, |a, b| a + b)
}

/// Pairwise-difference product for root `skip`, reduced across the pool.
fn product_skip(roots: &[Complex64], skip: usize) -> Complex64 {
    roots
        .par_iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, r)| roots[skip] - r)
        .reduce(Complex64::one, |a, b| a * b)
}

impl Strategy for DataParallel {
    fn step(&self, poly: &Poly, roots: &[Complex64]) -> Result<Vec<Complex64>> {
        self.pool.install(|| {
            (0..roots.len())
                .into_par_iter()
                .map(|i| {
                    let denominator = product_skip(roots, i);
                    if denominator.is_zero() {
                        return Err(Error::CoincidentRoots { skip: i });
                    }
                    Ok(roots[i] - eval(poly, roots[i]) / denominator)
                })
                // fail-fast: collecting into Result stops at the first fault
                .collect::<Result<Vec<_>>>()
        })
    }

    fn converged(&self, before: &[Complex64], after: &[Complex64], tolerance: f64) -> bool {
        debug_assert_eq!(before.len(), after.len());
        // per-index verdicts reduced by AND, no shared flag
        self.pool.install(|| {
            before
                .par_iter()
                .zip(after.par_iter())
                .all(|(b, a)| (a - b).norm() <= tolerance)
        })
    }
}

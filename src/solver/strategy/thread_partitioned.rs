use std::thread;

use anyhow::anyhow;
use num::complex::Complex64;
use num::{One, Zero};

use super::Strategy;
use crate::error::{Error, Result};
use crate::poly::Poly;

/// Fixed partition of the index range into contiguous chunks, one
/// explicitly spawned thread per chunk.
///
/// Each worker writes only its own chunk of the output and computes its own
/// partial sums and products; chunk results are reduced only after every
/// worker has been joined.
#[derive(Debug, Clone, Copy)]
pub struct ThreadPartitioned {
    workers: usize,
}

impl ThreadPartitioned {
    #[must_use]
    pub fn new(max_parallelism: usize) -> Self {
        Self {
            workers: max_parallelism.max(1),
        }
    }
}

/// Split `0..total` into `workers` contiguous chunks; trailing chunks may
/// be empty when there is less work than workers.
fn partition(total: usize, workers: usize) -> Vec<(usize, usize)> {
    let per_worker = total.div_ceil(workers);
    (0..workers)
        .map(|w| {
            let start = (w * per_worker).min(total);
            let end = (start + per_worker).min(total);
            (start, end)
        })
        .collect()
}

/// Term-wise evaluation with one partial sum per chunk, reduced after the
/// join.
fn eval_partitioned(poly: &Poly, x: Complex64, workers: usize) -> Complex64 {
    let coeffs = poly.coeffs();
    let partials: Vec<Complex64> = thread::scope(|scope| {
        let handles: Vec<_> = partition(coeffs.len(), workers)
            .into_iter()
            .map(|(start, end)| {
                scope.spawn(move || {
                    coeffs[start..end]
                        .iter()
                        .enumerate()
                        .fold(Complex64::zero(), |sum, (k, &c)| {
                            sum + x.powu((start + k) as u32) * c
                        })
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("infallible"))
            .collect()
    });
    partials.into_iter().fold(Complex64::zero(), |a, b| a + b)
}

/// Pairwise-difference product with one partial product per chunk, reduced
/// after the join.
fn product_partitioned(roots: &[Complex64], skip: usize, workers: usize) -> Complex64 {
    let partials: Vec<Complex64> = thread::scope(|scope| {
        let handles: Vec<_> = partition(roots.len(), workers)
            .into_iter()
            .map(|(start, end)| {
                scope.spawn(move || {
                    let mut product = Complex64::one();
                    for i in start..end {
                        if i == skip {
                            continue;
                        }
                        product *= roots[skip] - roots[i];
                    }
                    product
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("infallible"))
            .collect()
    });
    partials.into_iter().fold(Complex64::one(), |a, b| a * b)
}

impl Strategy for ThreadPartitioned {
    fn step(&self, poly: &Poly, roots: &[Complex64]) -> Result<Vec<Complex64>> {
        let workers = self.workers;
        let chunks: Vec<Result<Vec<Complex64>>> = thread::scope(|scope| {
            let handles: Vec<_> = partition(roots.len(), workers)
                .into_iter()
                .map(|(start, end)| {
                    scope.spawn(move || {
                        (start..end)
                            .map(|i| {
                                let denominator = product_partitioned(roots, i, workers);
                                if denominator.is_zero() {
                                    return Err(Error::CoincidentRoots { skip: i });
                                }
                                Ok(roots[i]
                                    - eval_partitioned(poly, roots[i], workers) / denominator)
                            })
                            .collect()
                    })
                })
                .collect();
            // the barrier: every chunk is joined before any result is read
            handles
                .into_iter()
                .map(|h| {
                    h.join()
                        .unwrap_or_else(|_| Err(anyhow!("worker thread panicked").into()))
                })
                .collect()
        });

        let mut next = Vec::with_capacity(roots.len());
        for chunk in chunks {
            // chunks are consumed in index order; the first fault wins
            next.extend(chunk?);
        }
        Ok(next)
    }

    fn converged(&self, before: &[Complex64], after: &[Complex64], tolerance: f64) -> bool {
        debug_assert_eq!(before.len(), after.len());
        let verdicts: Vec<bool> = thread::scope(|scope| {
            let handles: Vec<_> = partition(before.len(), self.workers)
                .into_iter()
                .map(|(start, end)| {
                    scope.spawn(move || {
                        before[start..end]
                            .iter()
                            .zip(&after[start..end])
                            .all(|(b, a)| (a - b).norm() <= tolerance)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("infallible"))
                .collect()
        });
        verdicts.into_iter().all(|converged| converged)
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;
    use num::Zero;

    use super::{partition, ThreadPartitioned};
    use crate::solver::initial_guess::unit_circle;
    use crate::solver::strategy::{Sequential, Strategy};
    use crate::{Error, Poly};

    #[test]
    fn partition_covers_the_range_without_overlap() {
        assert_eq!(partition(10, 4), vec![(0, 3), (3, 6), (6, 9), (9, 10)]);
        assert_eq!(partition(4, 2), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn more_workers_than_work_leaves_empty_chunks() {
        assert_eq!(partition(2, 4), vec![(0, 1), (1, 2), (2, 2), (2, 2)]);
    }

    #[test]
    fn step_matches_sequential_baseline() {
        let poly = Poly::new(&[3.0, -2.0, 1.0, 0.5, 1.0]).unwrap();
        let mut roots = vec![Complex64::zero(); poly.degree()];
        unit_circle(&mut roots);
        let threaded = ThreadPartitioned::new(3).step(&poly, &roots).unwrap();
        let seq = Sequential.step(&poly, &roots).unwrap();
        assert_eq!(threaded.len(), seq.len());
        for (t, s) in threaded.iter().zip(&seq) {
            assert!((t - s).norm() < 1e-12);
        }
    }

    #[test]
    fn coincident_estimates_fault() {
        let poly = Poly::new(&[-1.0, 1.0, 1.0]).unwrap();
        let roots = [Complex64::new(1.0, 0.0); 2];
        assert!(matches!(
            ThreadPartitioned::new(2).step(&poly, &roots),
            Err(Error::CoincidentRoots { .. })
        ));
    }

    #[test]
    fn convergence_folds_every_chunk_verdict() {
        let strategy = ThreadPartitioned::new(3);
        let before: Vec<_> = (0..7).map(|i| Complex64::new(f64::from(i), 0.0)).collect();
        let mut after = before.clone();
        assert!(strategy.converged(&before, &after, 1e-10));
        // a drift in the last chunk must invalidate the whole step
        after[6].re += 1e-3;
        assert!(!strategy.converged(&before, &after, 1e-10));
    }
}
